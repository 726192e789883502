//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use salon_app::AppState;
use salon_core::View;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{self, pages};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads the state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let p = palette::for_mode(state.theme);

    frame.render_widget(Block::default().style(Style::default().bg(p.background)), area);

    // The registry decides which page renders and whether it gets chrome
    let descriptor = state.descriptor();
    let areas = layout::create(area, !descriptor.standalone);

    if let Some(navbar) = areas.navbar {
        frame.render_widget(widgets::Navbar::new(descriptor.view, state.theme, p), navbar);
    }

    let title = descriptor.title;
    match descriptor.view {
        View::Home => frame.render_widget(
            pages::HomePage::new(state.scroll_offset, title, p),
            areas.body,
        ),
        View::Services => frame.render_widget(
            pages::ServicesPage::new(&state.pages.services, title, p),
            areas.body,
        ),
        View::Products => frame.render_widget(
            pages::ProductsPage::new(&state.pages.products, title, p),
            areas.body,
        ),
        View::Login => frame.render_widget(
            pages::LoginPage::new(&state.pages.login, title, p),
            areas.body,
        ),
        View::Admin => frame.render_widget(pages::AdminPage::new(state, p), areas.body),
    }

    if let Some(footer) = areas.footer {
        frame.render_widget(widgets::Footer::new(p), footer);
    }

    // Overlays render last so they sit above the page
    if let Some(kind) = state.modal.active() {
        frame.render_widget(widgets::FormDialog::new(kind, &state.form, p), area);
    }

    if !state.notifications.is_empty() {
        frame.render_widget(widgets::Toasts::new(&state.notifications, p), area);
    }
}
