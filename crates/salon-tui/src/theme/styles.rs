//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use salon_core::Severity;

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border_dim)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.border_active)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Prices and other "wood" highlights
pub fn price(p: &Palette) -> Style {
    Style::default().fg(p.wood).add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.wood)
}

// --- Status styles ---
pub fn severity(p: &Palette, severity: Severity) -> Style {
    match severity {
        Severity::Success => Style::default().fg(p.success),
        Severity::Error => Style::default().fg(p.error),
    }
}

pub fn field_error(p: &Palette) -> Style {
    Style::default().fg(p.error)
}

// --- Selection styles ---
/// Contrast text on the accent color, used for focused+selected items
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(accent_bold(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .style(Style::default().bg(p.popup_bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity(&LIGHT, Severity::Success).fg, Some(LIGHT.success));
        assert_eq!(severity(&LIGHT, Severity::Error).fg, Some(LIGHT.error));
    }

    #[test]
    fn test_focused_selected_uses_accent_background() {
        let style = focused_selected(&DARK);
        assert_eq!(style.bg, Some(DARK.accent));
        assert_eq!(style.fg, Some(DARK.contrast_fg));
    }
}
