//! Products page: live name search over the boutique catalog

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use salon_app::pages::ProductsPage as ProductsState;
use salon_core::catalog::data::{PRODUCTS_EMPTY, PRODUCTS_SEARCH_PLACEHOLDER, PRODUCTS_SUBTITLE};

use super::hint_line;
use crate::theme::{styles, Palette};

pub struct ProductsPage<'a> {
    state: &'a ProductsState,
    title: &'a str,
    palette: &'a Palette,
}

impl<'a> ProductsPage<'a> {
    pub fn new(state: &'a ProductsState, title: &'a str, palette: &'a Palette) -> Self {
        Self {
            state,
            title,
            palette,
        }
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.state.editing).title(" Buscar ");

        let mut spans = vec![Span::styled("/ ", styles::keybinding(p))];
        if self.state.query.is_empty() && !self.state.editing {
            spans.push(Span::styled(PRODUCTS_SEARCH_PLACEHOLDER, styles::text_muted(p)));
        } else {
            spans.push(Span::styled(
                self.state.query.clone(),
                styles::text_primary(p),
            ));
        }
        if self.state.editing {
            spans.push(Span::styled("▏", styles::accent(p)));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let visible = self.state.visible();

        if visible.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                PRODUCTS_EMPTY,
                styles::text_muted(p),
            )))
            .render(area, buf);
            return;
        }

        let rows = visible.iter().map(|product| {
            Row::new(vec![
                Cell::from(Span::styled(product.name, styles::heading(p))),
                Cell::from(Span::styled(product.category, styles::text_secondary(p))),
                Cell::from(Span::styled(product.price.to_string(), styles::price(p))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(14),
                Constraint::Length(8),
            ],
        )
        .row_highlight_style(styles::focused_selected(p))
        .highlight_symbol("› ");

        let mut table_state = TableState::default().with_selected(Some(self.state.selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

impl Widget for ProductsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 6 || inner.width == 0 {
            return;
        }

        let [heading, search, list, hints] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(self.title, styles::heading(p))),
            Line::from(Span::styled(PRODUCTS_SUBTITLE, styles::text_secondary(p))),
        ])
        .render(heading, buf);

        self.render_search(search, buf);
        self.render_list(list, buf);

        let hint = if self.state.editing {
            hint_line(p, &[("Enter", "Confirmar"), ("Esc", "Fechar busca")])
        } else {
            hint_line(
                p,
                &[
                    ("/", "Buscar"),
                    ("↑/↓", "Escolher"),
                    ("Enter", "Adicionar ao Carrinho"),
                ],
            )
        };
        Paragraph::new(hint).render(hints, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use salon_app::ViewRegistry;
    use salon_core::View;

    fn render(state: &ProductsState) -> TestTerminal {
        let title = ViewRegistry::descriptor(View::Products).title;
        let mut term = TestTerminal::new();
        term.render_widget(ProductsPage::new(state, title, &LIGHT), term.area());
        term
    }

    #[test]
    fn test_lists_whole_catalog_with_placeholder() {
        let term = render(&ProductsState::default());
        assert!(term.buffer_contains("Nossa Boutique"));
        assert!(term.buffer_contains("O que seu cabelo precisa hoje?"));
        assert!(term.buffer_contains("Helen Seward Organics 1/S"));
        assert!(term.buffer_contains("Kit Home Care Organic"));
        assert!(term.buffer_contains("R$ 380"));
    }

    #[test]
    fn test_query_narrows_the_list() {
        let mut state = ProductsState::default();
        state.set_query("kit".to_string());
        let term = render(&state);

        assert!(term.buffer_contains("Kit Home Care Organic"));
        assert!(!term.buffer_contains("Máscara Nutritiva Bio"));
        assert!(!term.buffer_contains("O que seu cabelo precisa hoje?"));
    }

    #[test]
    fn test_empty_result_message() {
        let mut state = ProductsState::default();
        state.set_query("xampu de abacate".to_string());
        let term = render(&state);

        assert!(term.buffer_contains("Não encontramos esse produto em nosso jardim..."));
    }

    #[test]
    fn test_editing_swaps_hints() {
        let mut state = ProductsState::default();
        state.editing = true;
        let term = render(&state);

        assert!(term.buffer_contains("Fechar busca"));
        assert!(!term.buffer_contains("Adicionar ao Carrinho"));
    }
}
