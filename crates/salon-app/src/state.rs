//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use salon_core::prelude::*;
use salon_core::{Notification, View};
use serde::Serialize;

use crate::config::{Settings, ThemeMode};
use crate::form::FormState;
use crate::modal::{ModalKind, ModalSession};
use crate::navigation::Session;
use crate::notifications::NotificationCenter;
use crate::pages::PageStates;
use crate::registry::{ViewDescriptor, ViewRegistry};

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Where keyboard input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// Page navigation and shortcuts
    Normal,
    /// Typing into the products search box
    SearchInput,
    /// Typing into the login form
    LoginForm,
    /// A dialog is open on top of the page
    Modal,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    pub session: Session,
    pub modal: ModalSession,
    pub form: FormState,
    pub pages: PageStates,
    pub notifications: NotificationCenter,

    /// Color scheme; independent of navigation
    pub theme: ThemeMode,

    /// Vertical scroll of the page body, reset on every navigation
    pub scroll_offset: u16,

    pub phase: AppPhase,

    #[serde(skip)]
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            session: Session::new(),
            modal: ModalSession::new(),
            form: FormState::default(),
            pages: PageStates::default(),
            notifications: NotificationCenter::new(Duration::from_millis(
                settings.notifications.duration_ms,
            )),
            theme: settings.ui.theme,
            scroll_offset: 0,
            phase: AppPhase::Running,
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────

    pub fn active_view(&self) -> View {
        self.session.active_view()
    }

    pub fn descriptor(&self) -> ViewDescriptor {
        ViewRegistry::descriptor(self.active_view())
    }

    pub fn show_chrome(&self) -> bool {
        self.session.show_chrome()
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.modal.is_open() {
            UiMode::Modal
        } else if self.active_view() == View::Login {
            UiMode::LoginForm
        } else if self.active_view() == View::Products && self.pages.products.editing {
            UiMode::SearchInput
        } else {
            UiMode::Normal
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // View changes
    // ─────────────────────────────────────────────────────────

    /// Leave the current view: close any dialog and reset scroll
    fn leave_view(&mut self) {
        self.modal.close();
        self.form = FormState::default();
        self.scroll_offset = 0;
    }

    fn enter_view(&mut self, view: View) {
        self.pages.remount(view);
    }

    /// Navigate with the access-control rule applied
    pub fn navigate(&mut self, target: View) -> View {
        self.leave_view();
        let effective = self.session.navigate(target);
        self.enter_view(effective);
        effective
    }

    pub fn navigate_to_id(&mut self, id: &str) -> View {
        self.navigate(View::resolve(id))
    }

    pub fn login(&mut self) {
        self.leave_view();
        self.session.login();
        self.enter_view(View::Admin);
    }

    pub fn logout(&mut self) {
        self.leave_view();
        self.session.logout();
        self.enter_view(View::Home);
    }

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────

    /// Open a dialog. Reopening the last closed kind keeps typed values.
    pub fn open_modal(&mut self, kind: ModalKind) {
        let reopening = !self.modal.is_open()
            && self.modal.kind() == Some(kind)
            && !self.form.fields.is_empty();
        if !reopening {
            self.form = FormState::for_kind(&kind);
        }
        self.modal.open(kind);
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Validate and submit the open dialog.
    ///
    /// Returns `false` if required fields are blank; the dialog then stays
    /// open with field errors attached.
    pub fn submit_modal(&mut self) -> bool {
        if !self.modal.is_open() {
            return false;
        }
        if !self.form.validate() {
            debug!("Form submission blocked by blank required fields");
            return false;
        }
        match self.modal.submit(&self.form) {
            Some(notification) => {
                self.notify(notification);
                self.form = FormState::default();
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Misc
    // ─────────────────────────────────────────────────────────

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.prune(now);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {:?}", self.theme);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn request_quit(&mut self) {
        info!("Quit requested");
        self.phase = AppPhase::Quitting;
    }
}
