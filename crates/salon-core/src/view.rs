//! Top-level views and the shared identifier normalization policy

use serde::{Deserialize, Serialize};

/// One of the fixed top-level screens of the storefront.
///
/// Exactly one view is active at any instant. String identifiers outside the
/// closed set normalize to [`View::Home`] through [`View::resolve`], which is
/// the single policy used by both the navigation controller and the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Services,
    Products,
    Login,
    Admin,
}

impl View {
    /// All views in navigation order
    pub const ALL: [View; 5] = [
        View::Home,
        View::Services,
        View::Products,
        View::Login,
        View::Admin,
    ];

    /// Strict lookup of a view identifier
    pub fn from_id(id: &str) -> Option<View> {
        match id {
            "home" => Some(View::Home),
            "services" => Some(View::Services),
            "products" => Some(View::Products),
            "login" => Some(View::Login),
            "admin" => Some(View::Admin),
            _ => None,
        }
    }

    /// Normalize any identifier to a view, falling back to `Home`
    pub fn resolve(id: &str) -> View {
        View::from_id(id).unwrap_or_else(|| {
            tracing::debug!("Unknown view id {:?}, normalizing to home", id);
            View::Home
        })
    }

    pub fn id(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Services => "services",
            View::Products => "products",
            View::Login => "login",
            View::Admin => "admin",
        }
    }

    /// Human-facing label shown in navigation chrome
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Início",
            View::Services => "Serviços",
            View::Products => "Produtos",
            View::Login => "Login",
            View::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
