//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use salon_core::prelude::*;
use salon_core::{Notification, View};

use crate::booking::booking_url;
use crate::message::Message;
use crate::modal::ModalKind;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines moved by PageUp/PageDown
const PAGE_SCROLL_LINES: u16 = 10;

const LOGIN_ACCEPTED: &str = "Acesso liberado! Bem-vindo de volta.";
const LOGIN_REJECTED: &str = "Vish, credenciais inválidas. Dá uma conferida aí!";
const BOOKING_LINK_FAILED: &str = "Não foi possível abrir o WhatsApp agora.";

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            // Ticks only arrive on idle polls, so typing must expire toasts too
            state.prune_notifications(Instant::now());
            match handle_key(state, key) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        Message::Tick => {
            state.prune_notifications(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(view) => {
            state.navigate(view);
            UpdateResult::none()
        }

        Message::NavigateToId(id) => {
            state.navigate_to_id(&id);
            UpdateResult::none()
        }

        Message::SubmitLogin => {
            if state.active_view() != View::Login {
                return UpdateResult::none();
            }
            if state.pages.login.credentials_accepted() {
                state.notify(Notification::success(LOGIN_ACCEPTED));
                state.login();
            } else {
                info!("Login rejected");
                state.notify(Notification::error(LOGIN_REJECTED));
            }
            UpdateResult::none()
        }

        Message::Logout => {
            state.logout();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Global
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.toggle_theme();
            UpdateResult::none()
        }

        Message::RequestBooking => match booking_url(&state.settings.booking) {
            Ok(url) => {
                debug!("Booking handoff to {}", url);
                UpdateResult::action(UpdateAction::OpenBookingLink {
                    url: url.to_string(),
                    browser: state.settings.booking.browser.clone(),
                })
            }
            Err(e) => {
                error!("Cannot build booking link: {}", e);
                state.notify(Notification::error(BOOKING_LINK_FAILED));
                UpdateResult::none()
            }
        },

        Message::Notify(notification) => {
            state.notify(notification);
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.scroll_up(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.scroll_down(1);
            UpdateResult::none()
        }

        Message::PageUp => {
            state.scroll_up(PAGE_SCROLL_LINES);
            UpdateResult::none()
        }

        Message::PageDown => {
            state.scroll_down(PAGE_SCROLL_LINES);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::OpenModal(kind) => {
            state.open_modal(kind);
            UpdateResult::none()
        }

        Message::CloseModal => {
            state.close_modal();
            UpdateResult::none()
        }

        Message::SubmitModal => {
            state.submit_modal();
            UpdateResult::none()
        }

        Message::ModalInput(c) => {
            if state.modal.is_open() {
                state.form.insert_char(c);
            }
            UpdateResult::none()
        }

        Message::ModalBackspace => {
            if state.modal.is_open() {
                state.form.backspace();
            }
            UpdateResult::none()
        }

        Message::ModalFocusNext => {
            state.form.focus_next();
            UpdateResult::none()
        }

        Message::ModalFocusPrev => {
            state.form.focus_prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Services page
        // ─────────────────────────────────────────────────────────
        Message::NextCategory => {
            if state.active_view() == View::Services {
                state.pages.services.next_category();
                debug!("Category filter: {}", state.pages.services.category());
            }
            UpdateResult::none()
        }

        Message::PrevCategory => {
            if state.active_view() == View::Services {
                state.pages.services.prev_category();
                debug!("Category filter: {}", state.pages.services.category());
            }
            UpdateResult::none()
        }

        Message::SelectCategory(index) => {
            if state.active_view() == View::Services {
                state.pages.services.select_category(index);
                debug!("Category filter: {}", state.pages.services.category());
            }
            UpdateResult::none()
        }

        Message::BookSelectedService => {
            if state.active_view() != View::Services {
                return UpdateResult::none();
            }
            match state.pages.services.selected_service() {
                Some(service) => {
                    UpdateResult::message(Message::OpenModal(ModalKind::booking(service.id)))
                }
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Products page
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            if state.active_view() == View::Products {
                state.pages.products.editing = true;
            }
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            if state.active_view() == View::Products {
                debug!("Product search: {:?}", text);
                state.pages.products.set_query(text);
            }
            UpdateResult::none()
        }

        Message::EndSearch => {
            state.pages.products.editing = false;
            UpdateResult::none()
        }

        Message::AddSelectedToCart => {
            if state.active_view() != View::Products {
                return UpdateResult::none();
            }
            match state.pages.products.selected_product() {
                Some(product) => UpdateResult::message(Message::Notify(Notification::success(
                    format!("{} no carrinho!", product.name),
                ))),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // List selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            handle_select(state, 1);
            UpdateResult::none()
        }

        Message::SelectPrev => {
            handle_select(state, -1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Login form
        // ─────────────────────────────────────────────────────────
        Message::LoginInput(c) => {
            if state.active_view() == View::Login {
                state.pages.login.insert_char(c);
            }
            UpdateResult::none()
        }

        Message::LoginBackspace => {
            if state.active_view() == View::Login {
                state.pages.login.backspace();
            }
            UpdateResult::none()
        }

        Message::LoginToggleField => {
            if state.active_view() == View::Login {
                state.pages.login.toggle_field();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Admin dashboard
        // ─────────────────────────────────────────────────────────
        Message::SelectAdminTab(tab) => {
            if state.active_view() == View::Admin {
                state.pages.admin.tab = tab;
            }
            UpdateResult::none()
        }

        Message::NextAdminTab => {
            if state.active_view() == View::Admin {
                state.pages.admin.tab = state.pages.admin.tab.next();
            }
            UpdateResult::none()
        }

        Message::PrevAdminTab => {
            if state.active_view() == View::Admin {
                state.pages.admin.tab = state.pages.admin.tab.prev();
            }
            UpdateResult::none()
        }

        Message::NewRecord => {
            if state.active_view() != View::Admin {
                return UpdateResult::none();
            }
            let kind = state.pages.admin.tab.record_kind();
            UpdateResult::message(Message::OpenModal(kind))
        }
    }
}

/// Move the highlighted card on list pages, clamped to the visible items
fn handle_select(state: &mut AppState, delta: isize) {
    let (selected, len) = match state.active_view() {
        View::Services => {
            let len = state.pages.services.visible().len();
            (&mut state.pages.services.selected, len)
        }
        View::Products => {
            let len = state.pages.products.visible().len();
            (&mut state.pages.products.selected, len)
        }
        _ => return,
    };
    if len == 0 {
        *selected = 0;
        return;
    }
    *selected = selected.saturating_add_signed(delta).min(len - 1);
}
