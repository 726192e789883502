//! Home page: hero, feature highlights, about section and call to action

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use salon_core::catalog::data::{
    Highlight, ABOUT_POINTS, ABOUT_TITLE, CTA_SUBTITLE, CTA_TITLE, FEATURES, HERO_BADGE,
    HERO_SUBTITLE, HERO_TITLE,
};

use super::hint_line;
use crate::theme::{styles, Palette};

pub struct HomePage<'a> {
    scroll: u16,
    title: &'a str,
    palette: &'a Palette,
}

impl<'a> HomePage<'a> {
    pub fn new(scroll: u16, title: &'a str, palette: &'a Palette) -> Self {
        Self {
            scroll,
            title,
            palette,
        }
    }

    fn highlight_lines(&self, items: &[Highlight]) -> Vec<Line<'static>> {
        let p = self.palette;
        items
            .iter()
            .flat_map(|item| {
                [
                    Line::from(vec![
                        Span::styled("● ", styles::accent(p)),
                        Span::styled(item.title, styles::heading(p)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", item.description),
                        styles::text_secondary(p),
                    )),
                ]
            })
            .collect()
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = vec![
            Line::from(Span::styled(HERO_BADGE, styles::accent(p))),
            Line::default(),
            Line::from(Span::styled(HERO_TITLE, styles::heading(p))),
            Line::from(Span::styled(HERO_SUBTITLE, styles::text_secondary(p))),
            Line::default(),
            hint_line(
                p,
                &[
                    ("r", "Reservar Horário"),
                    ("w", "Chamar no Whats"),
                    ("s", "Ver serviços"),
                ],
            ),
            Line::default(),
        ];

        lines.extend(self.highlight_lines(&FEATURES));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(ABOUT_TITLE, styles::heading(p))));
        lines.extend(self.highlight_lines(&ABOUT_POINTS));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(CTA_TITLE, styles::accent_bold(p))));
        lines.push(Line::from(Span::styled(CTA_SUBTITLE, styles::text_secondary(p))));

        lines
    }
}

impl Widget for HomePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false)
            .title(Span::styled(format!(" {} ", self.title), styles::accent_bold(self.palette)));
        let lines = self.lines();
        // Keep at least one row of content on screen
        let scroll = self.scroll.min(lines.len().saturating_sub(1) as u16);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use salon_app::ViewRegistry;
    use salon_core::View;

    fn home(scroll: u16) -> HomePage<'static> {
        HomePage::new(scroll, ViewRegistry::descriptor(View::Home).title, &LIGHT)
    }

    #[test]
    fn test_home_shows_hero_and_actions() {
        let mut term = TestTerminal::new();
        term.render_widget(home(0), term.area());

        assert!(term.line_contains(0, " 1OrganicHair "));
        assert!(term.buffer_contains("Beleza que respeita a sua essência."));
        assert!(term.buffer_contains("Reservar Horário"));
        assert!(term.buffer_contains("Chamar no Whats"));
    }

    #[test]
    fn test_home_scroll_reveals_call_to_action() {
        let mut term = TestTerminal::new();
        term.render_widget(home(0), term.area());
        assert!(!term.buffer_contains("Sinta a força do orgânico."));

        term.render_widget(home(20), term.area());
        assert!(term.buffer_contains("Sinta a força do orgânico."));
        assert!(!term.buffer_contains("Beleza que respeita"));
    }

    #[test]
    fn test_overscroll_keeps_content_visible() {
        let mut term = TestTerminal::new();
        term.render_widget(home(u16::MAX), term.area());
        assert!(!term.content().replace(['│', '╭', '╮', '╰', '╯', '─'], "").trim().is_empty());
    }
}
