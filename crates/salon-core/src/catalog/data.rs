//! Static storefront data: catalog records, dashboard mock data and page copy

use serde::Serialize;

use super::{Price, Product, ProductId, Service, ServiceId, ALL_CATEGORIES};

/// Category chips shown above the services list, sentinel first
pub const SERVICE_CATEGORIES: [&str; 5] = [ALL_CATEGORIES, "Corte", "Tratamento", "Cor", "Estilo"];

static SERVICES: [Service; 6] = [
    Service {
        id: ServiceId(1),
        name: "Corte Orgânico",
        category: "Corte",
        price: Price(180),
        duration_minutes: 60,
        description: "Corte personalizado respeitando o caimento natural dos fios e sua estrutura original.",
    },
    Service {
        id: ServiceId(2),
        name: "Terapia de Argila",
        category: "Tratamento",
        price: Price(220),
        duration_minutes: 90,
        description: "Ritual Helen Seward para desintoxicação profunda com argilas orgânicas.",
    },
    Service {
        id: ServiceId(3),
        name: "Coloração Vegetal",
        category: "Cor",
        price: Price(350),
        duration_minutes: 120,
        description: "Pigmentação natural à base de plantas, livre de amônia e metais pesados.",
    },
    Service {
        id: ServiceId(4),
        name: "Hidratação de Argan",
        category: "Tratamento",
        price: Price(150),
        duration_minutes: 45,
        description: "Nutrição profunda com óleo de argan orgânico prensado a frio.",
    },
    Service {
        id: ServiceId(5),
        name: "Corte de Pontas",
        category: "Corte",
        price: Price(120),
        duration_minutes: 30,
        description: "Manutenção técnica para remover pontas duplas sem alterar o comprimento.",
    },
    Service {
        id: ServiceId(6),
        name: "Terapia Capilar Milano",
        category: "Estilo",
        price: Price(250),
        duration_minutes: 75,
        description: "Tratamento de elite focado na saúde do couro cabeludo.",
    },
];

static PRODUCTS: [Product; 4] = [
    Product {
        id: ProductId(1),
        name: "Helen Seward Organics 1/S",
        category: "Shampoo",
        price: Price(115),
    },
    Product {
        id: ProductId(2),
        name: "Máscara Nutritiva Bio",
        category: "Tratamento",
        price: Price(165),
    },
    Product {
        id: ProductId(3),
        name: "Óleo Reparador Milano",
        category: "Finalização",
        price: Price(140),
    },
    Product {
        id: ProductId(4),
        name: "Kit Home Care Organic",
        category: "Kits",
        price: Price(380),
    },
];

/// The fixed, ordered service catalog
pub fn services() -> &'static [Service] {
    &SERVICES
}

/// The fixed, ordered product catalog
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn find_service(id: ServiceId) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

// ─────────────────────────────────────────────────────────────────
// Admin dashboard mock data
// ─────────────────────────────────────────────────────────────────

/// Trend attached to a dashboard stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up(&'static str),
    Critical,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match *self {
            Trend::Up(delta) => delta,
            Trend::Critical => "Crítico",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

pub const DASHBOARD_STATS: [StatCard; 4] = [
    StatCard {
        label: "Faturamento",
        value: "R$ 12.450",
        trend: Trend::Up("+12.5%"),
    },
    StatCard {
        label: "Agendamentos",
        value: "156",
        trend: Trend::Up("+8%"),
    },
    StatCard {
        label: "Clientes Ativos",
        value: "42",
        trend: Trend::Up("+15%"),
    },
    StatCard {
        label: "Estoque Bio",
        value: "5 itens",
        trend: Trend::Critical,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentStatus {
    Pending,
    Done,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Aguardando",
            AppointmentStatus::Done => "Finalizado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub customer: &'static str,
    pub service: &'static str,
    pub last_activity: &'static str,
    pub status: AppointmentStatus,
    pub amount: &'static str,
}

const APPOINTMENT_ROWS: usize = 5;

/// Mock appointment rows for the dashboard table.
///
/// Even rows are pending, odd rows are finished.
pub fn appointments() -> Vec<Appointment> {
    (1..=APPOINTMENT_ROWS)
        .map(|i| Appointment {
            customer: match i {
                1 => "Maria Alice",
                2 => "João Silva",
                _ => "Lucia Costa",
            },
            service: "Corte Energético + Aroma",
            last_activity: "Hoje, 14:30",
            status: if i % 2 == 0 {
                AppointmentStatus::Pending
            } else {
                AppointmentStatus::Done
            },
            amount: "R$ 240,00",
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Page copy
// ─────────────────────────────────────────────────────────────────

pub const BRAND: &str = "1OrganicHair";
pub const HERO_BADGE: &str = "🍃 Bio-Estética Capilar";
pub const HERO_TITLE: &str = "Beleza que respeita a sua essência.";
pub const HERO_SUBTITLE: &str = "No 1 Organic, unimos a sofisticação de Milão com o poder dos ingredientes botânicos. Um refúgio natural para o seu cabelo no coração da cidade.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Highlight; 4] = [
    Highlight {
        title: "100% Orgânico",
        description: "Produtos Helen Seward Milano, livres de químicos agressivos.",
    },
    Highlight {
        title: "Cruelty Free",
        description: "Ética e respeito em cada tratamento capilar.",
    },
    Highlight {
        title: "Brilho Botânico",
        description: "A força das plantas para restaurar a fibra do fio.",
    },
    Highlight {
        title: "Soul Care",
        description: "Mais que um corte, uma experiência de autocuidado.",
    },
];

pub const ABOUT_TITLE: &str = "O equilíbrio perfeito entre Natureza & Estilo.";

pub const ABOUT_POINTS: [Highlight; 3] = [
    Highlight {
        title: "Terapias Helen Seward",
        description: "Utilizamos a linha Milano para garantir resultados de alta performance com ingredientes naturais selecionados.",
    },
    Highlight {
        title: "Ambiente Sustentável",
        description: "Nossa loja reflete nosso compromisso: materiais naturais e um clima de paz para sua transformação.",
    },
    Highlight {
        title: "Atendimento Personalizado",
        description: "Cada cabelo é um ecossistema. Analisamos e tratamos sua saúde capilar de forma única.",
    },
];

pub const CTA_TITLE: &str = "Sinta a força do orgânico.";
pub const CTA_SUBTITLE: &str = "Dê ao seu cabelo o cuidado que ele merece. Sem químicos agressivos, apenas a pureza da natureza.";

pub const SERVICES_TITLE: &str = "Nossos Serviços";
pub const SERVICES_SUBTITLE: &str = "Experiências exclusivas com tecnologia verde Helen Seward Milano.";

pub const PRODUCTS_TITLE: &str = "Nossa Boutique";
pub const PRODUCTS_SUBTITLE: &str = "A linha profissional Helen Seward disponível para o seu cuidado diário.";
pub const PRODUCTS_SEARCH_PLACEHOLDER: &str = "O que seu cabelo precisa hoje?";
pub const PRODUCTS_EMPTY: &str = "Não encontramos esse produto em nosso jardim...";

pub const FOOTER_TAGLINE: &str = "Especialistas em beleza natural e sustentável. Cuidamos do seu cabelo com o poder da natureza.";

pub const CONTACT_LINES: [&str; 4] = [
    "Rua das Palmeiras, 123",
    "São Paulo, SP",
    "contato@1organichair.com",
    "(11) 99999-9999",
];

pub const LOGIN_TITLE: &str = "1Organic HQ";
pub const LOGIN_SUBTITLE: &str = "Gestão Natural & Eficiente";

pub const DASHBOARD_TITLE: &str = "Painel de Controle";
pub const DASHBOARD_SUBTITLE: &str = "Gerenciando a beleza orgânica hoje.";
