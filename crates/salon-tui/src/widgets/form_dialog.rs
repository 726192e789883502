//! Modal form dialog for bookings and admin records

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use salon_app::form::{FieldKind, FormState};
use salon_app::ModalKind;
use salon_core::catalog::data::find_service;

use super::modal_overlay;
use crate::theme::{styles, Palette};

const DIALOG_WIDTH: u16 = 62;

/// Centered dialog over a dimmed page
pub struct FormDialog<'a> {
    kind: ModalKind,
    form: &'a FormState,
    palette: &'a Palette,
}

impl<'a> FormDialog<'a> {
    pub fn new(kind: ModalKind, form: &'a FormState, palette: &'a Palette) -> Self {
        Self {
            kind,
            form,
            palette,
        }
    }

    /// Price and duration line for a service booking
    fn summary(&self) -> Option<Line<'static>> {
        let ModalKind::Service { subject: Some(id) } = self.kind else {
            return None;
        };
        let service = find_service(id)?;
        Some(Line::from(vec![
            Span::styled(service.price.to_string(), styles::price(self.palette)),
            Span::styled(
                format!("  ·  {}", service.duration_label()),
                styles::text_secondary(self.palette),
            ),
        ]))
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();

        if let Some(summary) = self.summary() {
            lines.push(summary);
            lines.push(Line::default());
        }

        for (i, field) in self.form.fields.iter().enumerate() {
            let focused = i == self.form.focused;

            let mut label = vec![Span::styled(field.label, styles::heading(p))];
            if field.required {
                label.push(Span::styled(" *", styles::field_error(p)));
            }
            lines.push(Line::from(label));

            let marker = if focused {
                Span::styled("› ", styles::accent_bold(p))
            } else {
                Span::raw("  ")
            };
            let value = if field.value.is_empty() {
                Span::styled(field.placeholder, styles::text_muted(p))
            } else if field.kind == FieldKind::Multiline {
                Span::styled(field.value.replace('\n', " "), styles::text_primary(p))
            } else {
                Span::styled(field.value.clone(), styles::text_primary(p))
            };
            let mut input = vec![marker, value];
            if focused {
                input.push(Span::styled("▏", styles::accent(p)));
            }
            lines.push(Line::from(input));

            if let Some(error) = field.error {
                lines.push(Line::from(Span::styled(
                    format!("  {}", error),
                    styles::field_error(p),
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(" enviar  ", styles::text_muted(p)),
            Span::styled("Tab", styles::keybinding(p)),
            Span::styled(" próximo campo  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" fechar", styles::text_muted(p)),
        ]));

        lines
    }
}

impl Widget for FormDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area, self.palette);

        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let rect = modal_overlay::centered_rect(DIALOG_WIDTH, height, area);

        modal_overlay::render_shadow(buf, rect, self.palette);
        modal_overlay::clear_area(buf, rect);

        let title = format!(" {} ", self.kind.title());
        let block = styles::modal_block(self.palette, &title);
        Paragraph::new(lines).block(block).render(rect, buf);
    }
}
