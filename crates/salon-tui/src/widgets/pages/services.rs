//! Services page: category chips and bookable service cards

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use salon_app::pages::ServicesPage as ServicesState;
use salon_core::catalog::data::{SERVICE_CATEGORIES, SERVICES_SUBTITLE};
use salon_core::Service;

use super::{hint_line, scroll_to_show};
use crate::theme::{styles, Palette};

/// Title, subtitle, spacer, chips, spacer
const HEADER_ROWS: usize = 5;

/// Name, meta, description, spacer
const CARD_ROWS: usize = 4;

pub struct ServicesPage<'a> {
    state: &'a ServicesState,
    title: &'a str,
    palette: &'a Palette,
}

impl<'a> ServicesPage<'a> {
    pub fn new(state: &'a ServicesState, title: &'a str, palette: &'a Palette) -> Self {
        Self {
            state,
            title,
            palette,
        }
    }

    fn chips(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (i, category) in SERVICE_CATEGORIES.iter().enumerate() {
            let style = if i == self.state.category_index {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", category), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn card(&self, service: &Service, selected: bool) -> [Line<'static>; CARD_ROWS] {
        let p = self.palette;
        let (marker, name_style) = if selected {
            (Span::styled("› ", styles::accent_bold(p)), styles::accent_bold(p))
        } else {
            (Span::raw("  "), styles::heading(p))
        };
        [
            Line::from(vec![
                marker,
                Span::styled(service.name, name_style),
                Span::raw("  "),
                Span::styled(service.price.to_string(), styles::price(p)),
            ]),
            Line::from(Span::styled(
                format!("  {} · {}", service.category, service.duration_label()),
                styles::text_muted(p),
            )),
            Line::from(Span::styled(
                format!("  {}", service.description),
                styles::text_secondary(p),
            )),
            Line::default(),
        ]
    }
}

impl Widget for ServicesPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let [content, hints] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let mut lines = vec![
            Line::from(Span::styled(self.title, styles::heading(p))),
            Line::from(Span::styled(SERVICES_SUBTITLE, styles::text_secondary(p))),
            Line::default(),
            self.chips(),
            Line::default(),
        ];

        let visible = self.state.visible();
        for (i, service) in visible.iter().enumerate() {
            lines.extend(self.card(service, i == self.state.selected));
        }

        let scroll = if visible.is_empty() {
            0
        } else {
            scroll_to_show(
                HEADER_ROWS + self.state.selected * CARD_ROWS,
                CARD_ROWS - 1,
                content.height,
            )
        };

        Paragraph::new(lines)
            .scroll((scroll, 0))
            .render(content, buf);

        Paragraph::new(hint_line(
            p,
            &[
                ("←/→", "Categoria"),
                ("↑/↓", "Escolher"),
                ("Enter", "Reservar Agora"),
                ("w", "WhatsApp"),
            ],
        ))
        .render(hints, buf);
    }
}
