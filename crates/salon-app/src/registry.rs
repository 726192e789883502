//! View registry: fixed mapping from view identifier to how it is rendered

use salon_core::catalog::data::{
    BRAND, DASHBOARD_TITLE, LOGIN_TITLE, PRODUCTS_TITLE, SERVICES_TITLE,
};
use salon_core::View;
use serde::Serialize;

/// Rendering metadata for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    pub view: View,
    pub title: &'static str,
    /// Standalone views suppress the shared header/footer chrome
    pub standalone: bool,
}

/// Lookup table over the closed set of views
pub struct ViewRegistry;

impl ViewRegistry {
    /// Resolve a string identifier; unknown ids yield the home descriptor
    pub fn resolve(view_id: &str) -> ViewDescriptor {
        Self::descriptor(View::resolve(view_id))
    }

    pub fn descriptor(view: View) -> ViewDescriptor {
        let (title, standalone) = match view {
            View::Home => (BRAND, false),
            View::Services => (SERVICES_TITLE, false),
            View::Products => (PRODUCTS_TITLE, false),
            View::Login => (LOGIN_TITLE, false),
            View::Admin => (DASHBOARD_TITLE, true),
        };
        ViewDescriptor {
            view,
            title,
            standalone,
        }
    }
}
