//! Storefront footer: tagline, navigation, contacts and copyright

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use salon_core::catalog::data::{BRAND, CONTACT_LINES, FOOTER_TAGLINE};

use super::navbar::MENU;
use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    palette: &'a Palette,
    year: i32,
}

impl<'a> Footer<'a> {
    /// Footer stamped with the current local year
    pub fn new(palette: &'a Palette) -> Self {
        Self::with_year(palette, chrono::Local::now().year())
    }

    pub fn with_year(palette: &'a Palette, year: i32) -> Self {
        Self { palette, year }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let tagline = Line::from(vec![
            Span::styled(BRAND, styles::accent_bold(p)),
            Span::raw("  "),
            Span::styled(FOOTER_TAGLINE, styles::text_secondary(p)),
        ]);
        let mut nav = Vec::new();
        for (key, label, _) in MENU {
            nav.push(Span::styled(format!("{} ", key), styles::keybinding(p)));
            nav.push(Span::styled(format!("{}   ", label), styles::text_secondary(p)));
        }
        let contacts = Line::from(vec![
            Span::styled(
                format!("© {} {}", self.year, BRAND),
                styles::text_muted(p),
            ),
            Span::raw("  "),
            Span::styled(CONTACT_LINES.join(" · "), styles::text_muted(p)),
        ]);

        Paragraph::new(vec![tagline, Line::from(nav), contacts]).render(inner, buf);
    }
}
