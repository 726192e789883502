//! Toast stack for transient success/error notifications

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use salon_app::notifications::NotificationCenter;
use salon_core::Severity;

use crate::theme::{styles, Palette};

/// Each toast: top border + message + bottom border
const TOAST_HEIGHT: u16 = 3;

/// Widest a toast grows before its message is truncated
const MAX_TOAST_WIDTH: u16 = 64;

/// Renders active notifications stacked from the top-right corner,
/// newest on top
pub struct Toasts<'a> {
    center: &'a NotificationCenter,
    palette: &'a Palette,
}

impl<'a> Toasts<'a> {
    pub fn new(center: &'a NotificationCenter, palette: &'a Palette) -> Self {
        Self { center, palette }
    }
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Error => "✗",
    }
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let notifications: Vec<_> = self.center.iter().collect();

        for (slot, notification) in notifications.iter().rev().enumerate() {
            let y = area.y + 1 + slot as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }

            // icon + space on the left, one cell of padding on each side
            let content_width = notification.message.width() as u16 + 4;
            let width = (content_width + 2)
                .min(MAX_TOAST_WIDTH)
                .min(area.width.saturating_sub(2));
            if width < 5 {
                return;
            }
            let x = area.x + area.width.saturating_sub(width + 1);
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);

            let severity_style = styles::severity(p, notification.severity);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(severity_style)
                .style(Style::default().bg(p.popup_bg));

            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(icon(notification.severity), severity_style),
                Span::raw(" "),
                Span::styled(notification.message.as_str(), styles::text_primary(p)),
            ]);

            Clear.render(rect, buf);
            Paragraph::new(line).block(block).render(rect, buf);
        }
    }
}
