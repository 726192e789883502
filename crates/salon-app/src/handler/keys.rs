//! Key event handlers for different UI modes

use salon_core::View;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::modal::ModalKind;
use crate::pages::AdminTab;
use crate::state::{AppState, UiMode};

/// Identifier the "Agendar" shortcut navigates to
const SCHEDULE_TARGET_ID: &str = "contact";

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::Modal => handle_key_modal(key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::LoginForm => handle_key_login(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while a dialog is open
fn handle_key_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CloseModal),
        InputKey::Enter => Some(Message::SubmitModal),
        InputKey::Tab | InputKey::Down => Some(Message::ModalFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::ModalFocusPrev),
        InputKey::Backspace => Some(Message::ModalBackspace),
        InputKey::Char(c) => Some(Message::ModalInput(c)),
        _ => None,
    }
}

/// Handle key events in product search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Keep query, leave input mode
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),

        InputKey::Backspace => {
            let mut query = state.pages.products.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut query = state.pages.products.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events on the login screen
fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::Navigate(View::Home)),
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::LoginToggleField)
        }
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        _ => None,
    }
}

/// Handle key events in normal page mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys shared by every page
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        _ => {}
    }

    if state.show_chrome() {
        if let Some(msg) = handle_key_chrome(key) {
            return Some(msg);
        }
    }

    match state.active_view() {
        View::Home => handle_key_home(key),
        View::Services => handle_key_services(key),
        View::Products => handle_key_products(key),
        View::Admin => handle_key_admin(key),
        // Login routes through LoginForm mode
        View::Login => None,
    }
}

/// Navbar shortcuts, available whenever the header is shown
fn handle_key_chrome(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('1') => Some(Message::Navigate(View::Home)),
        InputKey::Char('2') => Some(Message::Navigate(View::Services)),
        InputKey::Char('3') => Some(Message::Navigate(View::Products)),
        // The Admin nav item points at the login screen
        InputKey::Char('4') => Some(Message::NavigateToId(View::Login.id().to_string())),
        InputKey::Char('a') => Some(Message::NavigateToId(SCHEDULE_TARGET_ID.to_string())),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        _ => None,
    }
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::OpenModal(ModalKind::ScheduleRequest)),
        InputKey::Char('s') => Some(Message::Navigate(View::Services)),
        InputKey::Char('w') => Some(Message::RequestBooking),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        _ => None,
    }
}

fn handle_key_services(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Right | InputKey::Char('l') | InputKey::Tab => Some(Message::NextCategory),
        InputKey::Left | InputKey::Char('h') | InputKey::BackTab => Some(Message::PrevCategory),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Enter => Some(Message::BookSelectedService),
        InputKey::Char('w') => Some(Message::RequestBooking),
        _ => None,
    }
}

fn handle_key_products(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Enter => Some(Message::AddSelectedToCart),
        InputKey::Char('w') => Some(Message::RequestBooking),
        _ => None,
    }
}

fn handle_key_admin(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            AdminTab::ALL.get(index).map(|tab| Message::SelectAdminTab(*tab))
        }
        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::NextAdminTab),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::PrevAdminTab),
        InputKey::Char('n') => Some(Message::NewRecord),
        InputKey::Char('x') => Some(Message::Logout),
        _ => None,
    }
}
