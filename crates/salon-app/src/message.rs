//! Message types for the application (TEA pattern)

use salon_core::{Notification, View};

use crate::input_key::InputKey;
use crate::modal::ModalKind;
use crate::pages::AdminTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick; expires notifications
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    Navigate(View),

    /// Navigate by raw identifier; unknown ids land on Home
    NavigateToId(String),

    /// Submit the login form
    SubmitLogin,

    Logout,

    // ─────────────────────────────────────────────────────────
    // Global
    // ─────────────────────────────────────────────────────────
    ToggleTheme,

    /// Open the WhatsApp booking chat
    RequestBooking,

    /// Raise a toast
    Notify(Notification),

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    OpenModal(ModalKind),
    CloseModal,
    SubmitModal,
    ModalInput(char),
    ModalBackspace,
    ModalFocusNext,
    ModalFocusPrev,

    // ─────────────────────────────────────────────────────────
    // Services page
    // ─────────────────────────────────────────────────────────
    NextCategory,
    PrevCategory,
    SelectCategory(usize),

    /// Book the highlighted service
    BookSelectedService,

    // ─────────────────────────────────────────────────────────
    // Products page
    // ─────────────────────────────────────────────────────────
    StartSearch,

    /// Replace the search query
    SearchInput { text: String },

    EndSearch,

    AddSelectedToCart,

    // ─────────────────────────────────────────────────────────
    // Shared list selection (services and products)
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrev,

    // ─────────────────────────────────────────────────────────
    // Login form
    // ─────────────────────────────────────────────────────────
    LoginInput(char),
    LoginBackspace,
    LoginToggleField,

    // ─────────────────────────────────────────────────────────
    // Admin dashboard
    // ─────────────────────────────────────────────────────────
    SelectAdminTab(AdminTab),
    NextAdminTab,
    PrevAdminTab,

    /// "Adicionar Item" on the current tab
    NewRecord,
}
