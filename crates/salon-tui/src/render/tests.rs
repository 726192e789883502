//! Full-frame rendering tests

use super::*;
use crate::test_utils::{create_admin_state, create_test_state, TestTerminal};
use crate::theme::palette::{DARK, LIGHT};
use salon_app::{update, Message, ModalKind};
use salon_core::ServiceId;

/// Run a message and its follow-ups, dropping side-effect actions
fn run(state: &mut AppState, msg: Message) {
    let mut next = Some(msg);
    while let Some(m) = next {
        next = update(state, m).message;
    }
}

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_home_renders_with_chrome() {
    let state = create_test_state();
    let term = draw(&state);

    assert!(term.line_contains(1, "1OrganicHair"));
    assert!(term.buffer_contains("1 Início"));
    assert!(term.buffer_contains("Beleza que respeita a sua essência."));
    assert!(term.buffer_contains("Rua das Palmeiras, 123"));
}

#[test]
fn test_each_storefront_view_renders_its_page() {
    let mut state = create_test_state();

    state.navigate(View::Services);
    assert!(draw(&state).buffer_contains("Nossos Serviços"));

    state.navigate(View::Products);
    assert!(draw(&state).buffer_contains("Nossa Boutique"));

    state.navigate(View::Login);
    assert!(draw(&state).buffer_contains("1Organic HQ"));
}

#[test]
fn test_guest_admin_request_shows_login() {
    let mut state = create_test_state();
    state.navigate(View::Admin);
    let term = draw(&state);

    assert!(term.buffer_contains("1Organic HQ"));
    assert!(!term.buffer_contains("Painel de Controle"));
}

#[test]
fn test_admin_dashboard_is_standalone() {
    let state = create_admin_state();
    let term = draw(&state);

    assert!(term.buffer_contains("Painel de Controle"));
    assert!(!term.buffer_contains("1 Início"));
    assert!(!term.buffer_contains("Rua das Palmeiras"));
}

#[test]
fn test_chrome_follows_registry_when_authenticated() {
    let mut state = create_admin_state();
    for target in View::ALL {
        state.navigate(target);
        let descriptor = state.descriptor();
        let term = draw(&state);

        assert_eq!(descriptor.view, target);
        assert_eq!(term.buffer_contains("1 Início"), !descriptor.standalone);
        assert!(term.buffer_contains(descriptor.title));
    }
}

#[test]
fn test_logout_restores_chrome() {
    let mut state = create_admin_state();
    run(&mut state, Message::Logout);
    let term = draw(&state);

    assert!(term.buffer_contains("1 Início"));
    assert!(term.buffer_contains("Beleza que respeita"));
}

#[test]
fn test_open_modal_overlays_page() {
    let mut state = create_test_state();
    run(&mut state, Message::OpenModal(ModalKind::ScheduleRequest));
    let term = draw(&state);

    assert!(term.buffer_contains("Agendar Ritual"));
    assert!(term.buffer_contains("Seu Nome"));
}

#[test]
fn test_closed_modal_not_rendered() {
    let mut state = create_test_state();
    state.navigate(View::Services);
    run(&mut state, Message::OpenModal(ModalKind::booking(ServiceId(1))));
    run(&mut state, Message::CloseModal);
    let term = draw(&state);

    assert!(!term.buffer_contains("Agendar Corte Orgânico"));
    assert!(term.buffer_contains("Nossos Serviços"));
}

#[test]
fn test_login_success_toast_on_dashboard() {
    let mut state = create_test_state();
    state.navigate(View::Login);
    run(&mut state, Message::SubmitLogin);
    let term = draw(&state);

    assert!(state.session.is_admin_authenticated());
    assert!(term.buffer_contains("Acesso liberado! Bem-vindo de volta."));
    assert!(term.buffer_contains("Painel de Controle"));
}

#[test]
fn test_theme_switches_palette() {
    let mut state = create_test_state();
    assert_eq!(draw(&state).buffer()[(0, 0)].bg, LIGHT.card_bg);

    run(&mut state, Message::ToggleTheme);
    assert_eq!(draw(&state).buffer()[(0, 0)].bg, DARK.card_bg);
    assert!(draw(&state).buffer_contains("Modo Claro"));
}

#[test]
fn test_compact_terminal_renders_every_view() {
    let mut state = create_test_state();
    for target in [View::Home, View::Services, View::Products, View::Login] {
        state.navigate(target);
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, &state));
    }

    let admin = create_admin_state();
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &admin));
    assert!(term.buffer_contains("1OrganicHair"));
}
