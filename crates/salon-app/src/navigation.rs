//! Session/navigation controller
//!
//! Owns the active view and the admin-authenticated flag. All view changes
//! go through [`Session::navigate`], [`Session::login`] or [`Session::logout`];
//! `AppState` wraps these to also reset scroll and close modals.

use salon_core::prelude::*;
use salon_core::View;
use serde::Serialize;

/// Where an unauthenticated request for the admin view lands
pub const ADMIN_FALLBACK: View = View::Login;

/// Apply the access-control rule to a requested view
pub fn resolve_target(target: View, is_admin_authenticated: bool) -> View {
    if target == View::Admin && !is_admin_authenticated {
        ADMIN_FALLBACK
    } else {
        target
    }
}

/// Top-level navigation state: active view plus guest/admin role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    active_view: View,
    is_admin_authenticated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn is_admin_authenticated(&self) -> bool {
        self.is_admin_authenticated
    }

    /// Navigate to `target`, returning the view actually shown
    pub fn navigate(&mut self, target: View) -> View {
        let effective = resolve_target(target, self.is_admin_authenticated);
        if effective != target {
            info!("Admin view requested while signed out, redirecting to {}", effective);
        }
        debug!("Navigate {} -> {}", self.active_view, effective);
        self.active_view = effective;
        effective
    }

    /// Navigate by string identifier; unknown ids normalize to `Home`
    pub fn navigate_to_id(&mut self, id: &str) -> View {
        self.navigate(View::resolve(id))
    }

    /// Mark the admin as authenticated and show the dashboard
    pub fn login(&mut self) {
        self.is_admin_authenticated = true;
        self.active_view = View::Admin;
        info!("Admin session started");
    }

    /// Drop the admin session and go back home
    pub fn logout(&mut self) {
        self.is_admin_authenticated = false;
        self.active_view = View::Home;
        info!("Admin session ended");
    }

    /// Whether the shared header/footer chrome is visible
    pub fn show_chrome(&self) -> bool {
        !(self.is_admin_authenticated && self.active_view == View::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_home_guest() {
        let session = Session::new();
        assert_eq!(session.active_view(), View::Home);
        assert!(!session.is_admin_authenticated());
        assert!(session.show_chrome());
    }

    #[test]
    fn test_navigate_admin_while_guest_redirects_to_login() {
        let mut session = Session::new();
        assert_eq!(session.navigate(View::Admin), View::Login);
        assert_eq!(session.active_view(), View::Login);
        assert!(!session.is_admin_authenticated());
    }

    #[test]
    fn test_navigate_sequence_ends_on_last_target() {
        let targets = [
            View::Services,
            View::Products,
            View::Admin,
            View::Home,
            View::Login,
            View::Services,
        ];
        for n in 1..=targets.len() {
            let mut session = Session::new();
            for target in &targets[..n] {
                session.navigate(*target);
            }
            let expected = resolve_target(targets[n - 1], false);
            assert_eq!(session.active_view(), expected);
        }
    }

    #[test]
    fn test_navigate_admin_when_authenticated() {
        let mut session = Session::new();
        session.login();
        session.navigate(View::Products);
        assert_eq!(session.navigate(View::Admin), View::Admin);
    }

    #[test]
    fn test_navigate_unknown_id_goes_home() {
        let mut session = Session::new();
        session.navigate(View::Products);
        assert_eq!(session.navigate_to_id("contact"), View::Home);
    }

    #[test]
    fn test_navigate_to_id_admin_applies_access_rule() {
        let mut session = Session::new();
        assert_eq!(session.navigate_to_id("admin"), View::Login);
    }

    #[test]
    fn test_login_from_any_state() {
        for view in View::ALL {
            let mut session = Session::new();
            session.navigate(view);
            session.login();
            assert_eq!(session.active_view(), View::Admin);
            assert!(session.is_admin_authenticated());
        }
    }

    #[test]
    fn test_logout_from_any_state() {
        for view in View::ALL {
            for authed in [false, true] {
                let mut session = Session::new();
                if authed {
                    session.login();
                }
                session.navigate(view);
                session.logout();
                assert_eq!(session.active_view(), View::Home);
                assert!(!session.is_admin_authenticated());
            }
        }
    }

    #[test]
    fn test_show_chrome_hidden_only_on_authenticated_admin() {
        let mut session = Session::new();
        session.login();
        assert!(!session.show_chrome());

        session.navigate(View::Services);
        assert!(session.show_chrome());

        session.navigate(View::Login);
        assert!(session.show_chrome());
    }
}
