//! Screen layout definitions for the TUI
//!
//! Storefront views get the navbar and footer chrome around the body;
//! standalone views (the admin dashboard) take the whole screen.

use ratatui::layout::{Constraint, Layout, Rect};

/// Navbar height: top border + menu row + bottom border
pub const NAVBAR_HEIGHT: u16 = 3;

/// Footer height: top border + tagline + navigation + contacts + bottom border
pub const FOOTER_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation bar, absent for standalone views
    pub navbar: Option<Rect>,

    /// Active page content
    pub body: Rect,

    /// Footer with contacts, absent for standalone views
    pub footer: Option<Rect>,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_chrome` - Whether the active view renders inside navbar and footer
pub fn create(area: Rect, show_chrome: bool) -> ScreenAreas {
    if !show_chrome {
        return ScreenAreas {
            navbar: None,
            body: area,
            footer: None,
        };
    }

    let chunks = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        navbar: Some(chunks[0]),
        body: chunks[1],
        footer: Some(chunks[2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        let navbar = layout.navbar.expect("navbar");
        let footer = layout.footer.expect("footer");
        assert_eq!(navbar.height, NAVBAR_HEIGHT);
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.body.y, NAVBAR_HEIGHT);
        assert_eq!(layout.body.height, 24 - NAVBAR_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(footer.y, 24 - FOOTER_HEIGHT);
    }

    #[test]
    fn test_standalone_layout_uses_full_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert!(layout.navbar.is_none());
        assert!(layout.footer.is_none());
        assert_eq!(layout.body, area);
    }

    #[test]
    fn test_chrome_areas_contiguous() {
        let area = Rect::new(0, 0, 40, 12);
        let layout = create(area, true);
        let total = layout.navbar.map_or(0, |r| r.height)
            + layout.body.height
            + layout.footer.map_or(0, |r| r.height);
        assert_eq!(total, area.height);
    }
}
