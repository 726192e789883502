//! One widget per storefront view

mod admin;
mod home;
mod login;
mod products;
mod services;

pub use admin::AdminPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use products::ProductsPage;
pub use services::ServicesPage;

use ratatui::text::{Line, Span};

use crate::theme::{styles, Palette};

/// Key hint row shared by the pages: `[key] action` pairs
fn hint_line(palette: &Palette, hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(format!("[{}] ", key), styles::keybinding(palette)));
        spans.push(Span::styled(format!("{}  ", action), styles::text_muted(palette)));
    }
    Line::from(spans)
}

/// Vertical scroll that keeps rows `top..top + height` of the content visible
fn scroll_to_show(top: usize, height: usize, viewport: u16) -> u16 {
    let bottom = top + height;
    let viewport = viewport as usize;
    if bottom > viewport {
        (bottom - viewport).min(top) as u16
    } else {
        0
    }
}
