//! Transient per-view UI state
//!
//! Each page's state is rebuilt whenever its view is entered, so filters,
//! selections and typed credentials never survive a navigation.

use salon_core::catalog::data::{products, services, SERVICE_CATEGORIES};
use salon_core::{filter, Criterion, Product, Service, View, ALL_CATEGORIES};
use serde::Serialize;

use crate::modal::ModalKind;

// ─────────────────────────────────────────────────────────────────
// Services
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServicesPage {
    /// Index into `SERVICE_CATEGORIES`
    pub category_index: usize,
    /// Index into the filtered list
    pub selected: usize,
}

impl ServicesPage {
    pub fn category(&self) -> &'static str {
        SERVICE_CATEGORIES
            .get(self.category_index)
            .copied()
            .unwrap_or(ALL_CATEGORIES)
    }

    pub fn criterion(&self) -> Criterion {
        Criterion::category(self.category())
    }

    pub fn visible(&self) -> Vec<&'static Service> {
        let criterion = self.criterion();
        filter(services(), &criterion).collect()
    }

    pub fn selected_service(&self) -> Option<&'static Service> {
        self.visible().get(self.selected).copied()
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % SERVICE_CATEGORIES.len();
        self.selected = 0;
    }

    pub fn prev_category(&mut self) {
        let n = SERVICE_CATEGORIES.len();
        self.category_index = (self.category_index + n - 1) % n;
        self.selected = 0;
    }

    pub fn select_category(&mut self, index: usize) {
        if index < SERVICE_CATEGORIES.len() {
            self.category_index = index;
            self.selected = 0;
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductsPage {
    pub query: String,
    /// Whether keystrokes go to the search box
    pub editing: bool,
    pub selected: usize,
}

impl ProductsPage {
    pub fn criterion(&self) -> Criterion {
        Criterion::name_contains(self.query.clone())
    }

    pub fn visible(&self) -> Vec<&'static Product> {
        let criterion = self.criterion();
        filter(products(), &criterion).collect()
    }

    pub fn selected_product(&self) -> Option<&'static Product> {
        self.visible().get(self.selected).copied()
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.selected = 0;
    }
}

// ─────────────────────────────────────────────────────────────────
// Login
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginPage {
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub focused: LoginField,
}

impl LoginPage {
    pub fn toggle_field(&mut self) {
        self.focused = match self.focused {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focused {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_value().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value().pop();
    }

    /// Only the blank pair is accepted
    pub fn credentials_accepted(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────
// Admin
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Services,
    Products,
    Customers,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Overview,
        AdminTab::Services,
        AdminTab::Products,
        AdminTab::Customers,
        AdminTab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Dashboard",
            AdminTab::Services => "Serviços",
            AdminTab::Products => "Estoque Shop",
            AdminTab::Customers => "Clientes",
            AdminTab::Settings => "Configurações",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Rituais Agendados",
            AdminTab::Services => "Catálogo de Serviços",
            AdminTab::Products => "Produtos em Loja",
            AdminTab::Customers => "Base de Membros",
            AdminTab::Settings => "Ajustes do Sistema",
        }
    }

    /// Kind of record "Adicionar Item" creates on this tab
    pub fn record_kind(&self) -> ModalKind {
        match self {
            AdminTab::Services => ModalKind::new_service(),
            AdminTab::Products => ModalKind::new_product(),
            _ => ModalKind::Customer,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> AdminTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> AdminTab {
        let n = Self::ALL.len();
        Self::ALL[(self.index() + n - 1) % n]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminPage {
    pub tab: AdminTab,
}

// ─────────────────────────────────────────────────────────────────
// Aggregate
// ─────────────────────────────────────────────────────────────────

/// Page state for every view; only the active view's entry is meaningful
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageStates {
    pub services: ServicesPage,
    pub products: ProductsPage,
    pub login: LoginPage,
    pub admin: AdminPage,
}

impl PageStates {
    /// Reset the state owned by `view`, as if it were freshly mounted
    pub fn remount(&mut self, view: View) {
        match view {
            View::Home => {}
            View::Services => self.services = ServicesPage::default(),
            View::Products => self.products = ProductsPage::default(),
            View::Login => self.login = LoginPage::default(),
            View::Admin => self.admin = AdminPage::default(),
        }
    }
}
