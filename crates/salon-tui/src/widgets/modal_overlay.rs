//! Shared modal overlay utilities.
//!
//! Centering rects, dimming the page behind a dialog and drawing the
//! dialog's drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use salon_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area, like a translucent backdrop.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default()
        .fg(palette.text_muted)
        .bg(palette.shadow);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.shadow).bg(palette.shadow);

    // Right edge
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a rect and prepare it for modal content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        let result = centered_rect(40, 10, area);
        assert_eq!(result, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let result = centered_rect(40, 12, area);
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        let result = centered_rect(40, 10, area);
        assert_eq!(result, Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_offset_area() {
        let area = Rect::new(5, 3, 10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, area, &LIGHT);
        for y in 3..8 {
            for x in 5..15 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.fg, LIGHT.text_muted);
                assert_eq!(cell.bg, LIGHT.shadow);
            }
        }
        // Outside the area is untouched
        assert_ne!(buf[(0, 0)].bg, LIGHT.shadow);
    }

    #[test]
    fn test_render_shadow_offset() {
        let area = Rect::new(0, 0, 20, 10);
        let modal = Rect::new(5, 2, 10, 6);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, modal, &LIGHT);

        let right_shadow = &buf[(15, 3)];
        assert_eq!(right_shadow.bg, LIGHT.shadow);
        assert_eq!(right_shadow.symbol(), " ");

        let bottom_shadow = &buf[(6, 8)];
        assert_eq!(bottom_shadow.bg, LIGHT.shadow);
        assert_eq!(bottom_shadow.symbol(), " ");
    }

    #[test]
    fn test_render_shadow_no_overflow() {
        let area = Rect::new(0, 0, 10, 10);
        let modal = Rect::new(8, 8, 2, 2);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, modal, &LIGHT);
    }

    #[test]
    fn test_clear_area() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        for y in 0..5 {
            for x in 0..10 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('X');
                }
            }
        }

        clear_area(&mut buf, Rect::new(2, 2, 5, 2));

        for y in 2..4 {
            for x in 2..7 {
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
        assert_eq!(buf[(0, 0)].symbol(), "X");
    }
}
