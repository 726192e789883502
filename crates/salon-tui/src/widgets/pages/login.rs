//! Admin login card

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use salon_app::pages::{LoginField, LoginPage as LoginState};
use salon_core::catalog::data::LOGIN_SUBTITLE;

use super::hint_line;
use crate::theme::{styles, Palette};
use crate::widgets::modal_overlay::centered_rect;

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 13;

/// Mask character for the password field
const MASK: char = '•';

pub struct LoginPage<'a> {
    state: &'a LoginState,
    title: &'a str,
    palette: &'a Palette,
}

impl<'a> LoginPage<'a> {
    pub fn new(state: &'a LoginState, title: &'a str, palette: &'a Palette) -> Self {
        Self {
            state,
            title,
            palette,
        }
    }

    fn field_lines(&self, label: &'static str, value: String, focused: bool) -> [Line<'static>; 2] {
        let p = self.palette;
        let label_style = if focused {
            styles::accent_bold(p)
        } else {
            styles::text_secondary(p)
        };
        let mut input = vec![
            Span::styled(if focused { "› " } else { "  " }, styles::accent_bold(p)),
            Span::styled(value, styles::text_primary(p)),
        ];
        if focused {
            input.push(Span::styled("▏", styles::accent(p)));
        }
        [Line::from(Span::styled(label, label_style)), Line::from(input)]
    }
}

impl Widget for LoginPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);

        let masked: String = self.state.password.chars().map(|_| MASK).collect();

        let mut lines = vec![
            Line::from(Span::styled(self.title, styles::accent_bold(p))).centered(),
            Line::from(Span::styled(LOGIN_SUBTITLE, styles::text_muted(p))).centered(),
            Line::default(),
        ];
        lines.extend(self.field_lines(
            "E-mail",
            self.state.email.clone(),
            self.state.focused == LoginField::Email,
        ));
        lines.push(Line::default());
        lines.extend(self.field_lines(
            "Senha",
            masked,
            self.state.focused == LoginField::Password,
        ));
        lines.push(Line::default());
        lines.push(
            hint_line(p, &[("Enter", "Entrar"), ("Tab", "Campo"), ("Esc", "Voltar")])
                .alignment(Alignment::Center),
        );

        Paragraph::new(lines)
            .block(styles::glass_block(p, true))
            .render(card, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use salon_app::ViewRegistry;
    use salon_core::View;

    fn render(state: &LoginState) -> TestTerminal {
        let title = ViewRegistry::descriptor(View::Login).title;
        let mut term = TestTerminal::new();
        term.render_widget(LoginPage::new(state, title, &LIGHT), term.area());
        term
    }

    #[test]
    fn test_login_card_copy() {
        let term = render(&LoginState::default());
        assert!(term.buffer_contains("1Organic HQ"));
        assert!(term.buffer_contains("Gestão Natural & Eficiente"));
        assert!(term.buffer_contains("E-mail"));
        assert!(term.buffer_contains("Senha"));
    }

    #[test]
    fn test_password_is_masked() {
        let state = LoginState {
            email: "ana@1organic.com".to_string(),
            password: "segredo".to_string(),
            focused: LoginField::Password,
        };
        let term = render(&state);

        assert!(term.buffer_contains("ana@1organic.com"));
        assert!(!term.buffer_contains("segredo"));
        assert!(term.buffer_contains("•••••••"));
    }

    #[test]
    fn test_focus_marker_on_email_by_default() {
        let state = LoginState {
            email: "ana".to_string(),
            ..LoginState::default()
        };
        let term = render(&state);
        assert!(term.buffer_contains("› ana"));
    }
}
