//! Storefront navigation bar

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use salon_app::config::ThemeMode;
use salon_core::catalog::data::BRAND;
use salon_core::View;

use crate::theme::{styles, Palette};

/// Menu entries: shortcut key, label, and the view that lights the entry up.
/// "Admin" targets the login screen.
pub const MENU: [(char, &str, View); 4] = [
    ('1', "Início", View::Home),
    ('2', "Serviços", View::Services),
    ('3', "Produtos", View::Products),
    ('4', "Admin", View::Login),
];

/// Brand, menu with the active entry highlighted, and the theme toggle hint
pub struct Navbar<'a> {
    active: View,
    theme: ThemeMode,
    palette: &'a Palette,
}

impl<'a> Navbar<'a> {
    pub fn new(active: View, theme: ThemeMode, palette: &'a Palette) -> Self {
        Self {
            active,
            theme,
            palette,
        }
    }

    fn menu_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![Span::styled(BRAND, styles::accent_bold(p)), Span::raw("  ")];

        for (key, label, view) in MENU {
            let label = format!(" {} {} ", key, label);
            let style = if view == self.active {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(label, style));
        }

        Line::from(spans)
    }

    /// Right-hand hints, widest first; the renderer uses the first that fits
    fn hints(&self) -> [Line<'static>; 2] {
        let p = self.palette;
        let target = if self.theme.is_dark() {
            "Claro"
        } else {
            "Escuro"
        };
        let theme = [
            Span::styled("[t] ", styles::keybinding(p)),
            Span::styled(format!("Modo {}", target), styles::text_muted(p)),
        ];

        let mut full = vec![
            Span::styled("[a] ", styles::keybinding(p)),
            Span::styled("Agendar  ", styles::text_muted(p)),
        ];
        full.extend(theme.clone());

        [Line::from(full), Line::from(theme.to_vec())]
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let menu = self.menu_line();
        let free = (inner.width as usize).saturating_sub(menu.width() + 1);

        Paragraph::new(menu).render(inner, buf);

        if let Some(hint) = self.hints().into_iter().find(|h| h.width() <= free) {
            let width = hint.width() as u16;
            let hint_area = Rect {
                x: inner.right().saturating_sub(width),
                width,
                ..inner
            };
            Paragraph::new(hint)
                .alignment(Alignment::Right)
                .render(hint_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use ratatui::layout::Rect;

    #[test]
    fn test_navbar_shows_brand_and_menu() {
        let mut term = TestTerminal::new();
        let navbar = Navbar::new(View::Home, ThemeMode::Light, &LIGHT);
        term.render_widget(navbar, Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("1OrganicHair"));
        assert!(term.buffer_contains("1 Início"));
        assert!(term.buffer_contains("2 Serviços"));
        assert!(term.buffer_contains("3 Produtos"));
        assert!(term.buffer_contains("4 Admin"));
    }

    #[test]
    fn test_theme_hint_names_the_other_mode() {
        let mut term = TestTerminal::new();
        term.render_widget(
            Navbar::new(View::Home, ThemeMode::Light, &LIGHT),
            Rect::new(0, 0, 80, 3),
        );
        assert!(term.buffer_contains("Modo Escuro"));

        term.render_widget(
            Navbar::new(View::Home, ThemeMode::Dark, &LIGHT),
            Rect::new(0, 0, 80, 3),
        );
        assert!(term.buffer_contains("Modo Claro"));
    }

    #[test]
    fn test_active_entry_is_highlighted() {
        let mut term = TestTerminal::new();
        term.render_widget(
            Navbar::new(View::Services, ThemeMode::Light, &LIGHT),
            Rect::new(0, 0, 80, 3),
        );

        // Find the "2" of " 2 Serviços " on the menu row
        let row = 1;
        let x = (0..80)
            .find(|&x| term.cell_at(x, row) == Some("2"))
            .expect("services entry");
        assert_eq!(term.buffer()[(x, row)].bg, LIGHT.accent);
    }

    #[test]
    fn test_schedule_hint_on_wide_screen() {
        let mut term = TestTerminal::with_size(110, 3);
        term.render_widget(
            Navbar::new(View::Home, ThemeMode::Light, &LIGHT),
            term.area(),
        );
        assert!(term.buffer_contains("[a] Agendar"));
        assert!(term.buffer_contains("Modo Escuro"));
    }

    #[test]
    fn test_admin_entry_lit_on_login_view() {
        let mut term = TestTerminal::new();
        term.render_widget(
            Navbar::new(View::Login, ThemeMode::Light, &LIGHT),
            Rect::new(0, 0, 80, 3),
        );

        let row = 1;
        let x = (0..80)
            .find(|&x| term.cell_at(x, row) == Some("4"))
            .expect("admin entry");
        assert_eq!(term.buffer()[(x, row)].bg, LIGHT.accent);
    }

    #[test]
    fn test_hint_dropped_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(
            Navbar::new(View::Home, ThemeMode::Light, &LIGHT),
            Rect::new(0, 0, 40, 3),
        );
        assert!(!term.buffer_contains("Modo Escuro"));
        assert!(term.buffer_contains("1OrganicHair"));
    }
}
