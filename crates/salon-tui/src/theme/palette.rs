//! Color palettes for the light and dark storefront themes.

use ratatui::style::Color;
use salon_app::config::ThemeMode;

/// Semantic colors used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub wood: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub contrast_fg: Color,

    // --- Status ---
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(249, 247, 242),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(255, 255, 255),
    border_dim: Color::Rgb(214, 209, 196),
    border_active: Color::Rgb(46, 94, 62),
    accent: Color::Rgb(46, 94, 62),
    wood: Color::Rgb(139, 94, 60),
    text_primary: Color::Rgb(33, 37, 31),
    text_secondary: Color::Rgb(87, 94, 82),
    text_muted: Color::Rgb(150, 153, 143),
    contrast_fg: Color::Rgb(255, 255, 255),
    success: Color::Rgb(46, 125, 50),
    error: Color::Rgb(198, 40, 40),
    warning: Color::Rgb(183, 121, 31),
    shadow: Color::Rgb(200, 196, 186),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 20, 16),
    card_bg: Color::Rgb(26, 31, 24),
    popup_bg: Color::Rgb(33, 39, 31),
    border_dim: Color::Rgb(58, 66, 54),
    border_active: Color::Rgb(129, 178, 128),
    accent: Color::Rgb(129, 178, 128),
    wood: Color::Rgb(196, 154, 108),
    text_primary: Color::Rgb(232, 230, 222),
    text_secondary: Color::Rgb(176, 178, 166),
    text_muted: Color::Rgb(110, 116, 104),
    contrast_fg: Color::Rgb(17, 20, 16),
    success: Color::Rgb(129, 199, 132),
    error: Color::Rgb(239, 115, 115),
    warning: Color::Rgb(230, 180, 90),
    shadow: Color::Rgb(6, 8, 6),
};

/// Palette for the given theme mode
pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
