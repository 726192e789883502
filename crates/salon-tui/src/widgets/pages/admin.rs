//! Admin dashboard: sidebar tabs, stat cards and the per-tab table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use salon_app::pages::AdminTab;
use salon_app::AppState;
use salon_core::catalog::data::{
    appointments, products, services, AppointmentStatus, StatCard, Trend, BRAND,
    DASHBOARD_STATS, DASHBOARD_SUBTITLE,
};

use super::hint_line;
use crate::theme::{styles, Palette};

const SIDEBAR_WIDTH: u16 = 26;

pub struct AdminPage<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> AdminPage<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn tab(&self) -> AdminTab {
        self.state.pages.admin.tab
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut lines = vec![
            Line::from(Span::styled(BRAND, styles::accent_bold(p))),
            Line::default(),
        ];

        for (i, tab) in AdminTab::ALL.iter().enumerate() {
            let style = if *tab == self.tab() {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            lines.push(Line::from(Span::styled(
                format!(" {} {} ", i + 1, tab.label()),
                style,
            )));
        }

        lines.push(Line::default());
        lines.push(hint_line(p, &[("n", "Adicionar Item")]));
        lines.push(hint_line(p, &[("x", "Encerrar Sessão")]));
        lines.push(hint_line(p, &[("q", "Sair")]));

        Paragraph::new(lines)
            .block(styles::glass_block(p, false))
            .render(area, buf);
    }

    fn render_stat(&self, stat: &StatCard, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let trend_style = match stat.trend {
            Trend::Up(_) => Style::default().fg(p.success),
            Trend::Critical => Style::default().fg(p.error),
        };
        Paragraph::new(vec![
            Line::from(Span::styled(stat.label, styles::text_muted(p))),
            Line::from(vec![
                Span::styled(stat.value, styles::heading(p)),
                Span::raw(" "),
                Span::styled(stat.trend.label(), trend_style),
            ]),
        ])
        .block(styles::glass_block(p, false))
        .render(area, buf);
    }

    /// Record table for the active tab; the settings tab has none
    fn table(&self) -> Option<Table<'static>> {
        let p = self.palette;
        let header_style = styles::text_muted(p);

        let table = match self.tab() {
            AdminTab::Services => {
                let rows = services().iter().map(|s| {
                    Row::new(vec![
                        Cell::from(Span::styled(s.name, styles::heading(p))),
                        Cell::from(s.category),
                        Cell::from(s.duration_label()),
                        Cell::from(Span::styled(s.price.to_string(), styles::price(p))),
                    ])
                });
                Table::new(
                    rows,
                    [
                        Constraint::Min(20),
                        Constraint::Length(12),
                        Constraint::Length(9),
                        Constraint::Length(8),
                    ],
                )
                .header(Row::new(["Serviço", "Categoria", "Duração", "Preço"]).style(header_style))
            }
            AdminTab::Products => {
                let rows = products().iter().map(|item| {
                    Row::new(vec![
                        Cell::from(Span::styled(item.name, styles::heading(p))),
                        Cell::from(item.category),
                        Cell::from(Span::styled(item.price.to_string(), styles::price(p))),
                    ])
                });
                Table::new(
                    rows,
                    [
                        Constraint::Min(20),
                        Constraint::Length(12),
                        Constraint::Length(8),
                    ],
                )
                .header(Row::new(["Produto", "Categoria", "Preço"]).style(header_style))
            }
            AdminTab::Overview | AdminTab::Customers => {
                let rows = appointments().into_iter().map(|a| {
                    let status_style = match a.status {
                        AppointmentStatus::Pending => Style::default().fg(p.warning),
                        AppointmentStatus::Done => Style::default().fg(p.success),
                    };
                    Row::new(vec![
                        Cell::from(Span::styled(a.customer, styles::heading(p))),
                        Cell::from(a.service),
                        Cell::from(a.last_activity),
                        Cell::from(Span::styled(a.status.label(), status_style)),
                        Cell::from(a.amount),
                    ])
                });
                Table::new(
                    rows,
                    [
                        Constraint::Length(12),
                        Constraint::Min(16),
                        Constraint::Length(12),
                        Constraint::Length(11),
                        Constraint::Length(10),
                    ],
                )
                .header(
                    Row::new(["Cliente", "Serviço", "Atividade", "Status", "Valor"])
                        .style(header_style),
                )
            }
            AdminTab::Settings => return None,
        };
        Some(table)
    }

    fn settings_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let settings = &self.state.settings;
        let theme = if self.state.theme.is_dark() {
            "Escuro"
        } else {
            "Claro"
        };
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<16}", label), styles::text_muted(p)),
                Span::styled(value, styles::text_primary(p)),
            ])
        };
        vec![
            row("Tema", theme.to_string()),
            row("WhatsApp", settings.booking.whatsapp_number.clone()),
            row(
                "Avisos",
                format!("{} ms", settings.notifications.duration_ms),
            ),
        ]
    }

    fn render_section(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, true).title(Span::styled(
            format!(" {} ", self.tab().section_title()),
            styles::accent_bold(p),
        ));

        match self.table() {
            Some(table) => table.block(block).render(area, buf),
            None => Paragraph::new(self.settings_lines())
                .block(block)
                .render(area, buf),
        }
    }
}

impl Widget for AdminPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                .areas(area);

        self.render_sidebar(sidebar, buf);

        let [heading, stats, section] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .areas(main);

        Paragraph::new(vec![
            Line::from(Span::styled(self.state.descriptor().title, styles::heading(p))),
            Line::from(Span::styled(DASHBOARD_SUBTITLE, styles::text_secondary(p))),
        ])
        .render(heading.inner(Margin::new(1, 0)), buf);

        let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(stats);
        for (stat, card) in DASHBOARD_STATS.iter().zip(cards.iter()) {
            self.render_stat(stat, *card, buf);
        }

        self.render_section(section, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_admin_state, TestTerminal};
    use crate::theme::palette::LIGHT;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 30);
        term.render_widget(AdminPage::new(state, &LIGHT), term.area());
        term
    }

    #[test]
    fn test_dashboard_overview() {
        let state = create_admin_state();
        let term = render(&state);

        assert!(term.buffer_contains("Painel de Controle"));
        assert!(term.buffer_contains("Rituais Agendados"));
        assert!(term.buffer_contains("Faturamento"));
        assert!(term.buffer_contains("Crítico"));
        assert!(term.buffer_contains("Maria Alice"));
        assert!(term.buffer_contains("Aguardando"));
        assert!(term.buffer_contains("Encerrar Sessão"));
    }

    #[test]
    fn test_sidebar_lists_every_tab() {
        let state = create_admin_state();
        let term = render(&state);
        for tab in AdminTab::ALL {
            assert!(term.buffer_contains(tab.label()));
        }
    }

    #[test]
    fn test_services_tab_lists_catalog() {
        let mut state = create_admin_state();
        state.pages.admin.tab = AdminTab::Services;
        let term = render(&state);

        assert!(term.buffer_contains("Catálogo de Serviços"));
        assert!(term.buffer_contains("Terapia Capilar Milano"));
        assert!(!term.buffer_contains("Maria Alice"));
    }

    #[test]
    fn test_products_tab_lists_stock() {
        let mut state = create_admin_state();
        state.pages.admin.tab = AdminTab::Products;
        let term = render(&state);

        assert!(term.buffer_contains("Produtos em Loja"));
        assert!(term.buffer_contains("Óleo Reparador Milano"));
    }

    #[test]
    fn test_settings_tab_shows_booking_number() {
        let mut state = create_admin_state();
        state.pages.admin.tab = AdminTab::Settings;
        let term = render(&state);

        assert!(term.buffer_contains("Ajustes do Sistema"));
        assert!(term.buffer_contains("351964277807"));
        assert!(term.buffer_contains("Claro"));
    }

    #[test]
    fn test_compact_admin_does_not_panic() {
        let state = create_admin_state();
        let mut term = TestTerminal::compact();
        term.render_widget(AdminPage::new(&state, &LIGHT), term.area());
    }
}
