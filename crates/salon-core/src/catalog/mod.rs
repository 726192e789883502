//! Catalog entities: services and products offered by the salon
//!
//! Records are immutable reference data. The static data set lives in
//! [`data`]; nothing in the application mutates it.

pub mod data;

use serde::Serialize;

/// Sentinel category meaning "no category filter"
pub const ALL_CATEGORIES: &str = "Todos";

/// Identifier of a service record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ServiceId(pub u32);

/// Identifier of a product record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProductId(pub u32);

/// Price in whole reais
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Price(pub u32);

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R$ {}", self.0)
    }
}

/// Common read-only view over a catalog record, used by the filter
pub trait CatalogEntity {
    type Id: Copy + Eq;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn price(&self) -> Price;
}

/// A bookable salon service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: &'static str,
    pub category: &'static str,
    pub price: Price,
    /// Duration in minutes
    pub duration_minutes: u32,
    pub description: &'static str,
}

impl Service {
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }
}

impl CatalogEntity for Service {
    type Id = ServiceId;

    fn id(&self) -> ServiceId {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn category(&self) -> &str {
        self.category
    }

    fn price(&self) -> Price {
        self.price
    }
}

/// A retail product from the shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub category: &'static str,
    pub price: Price,
}

impl CatalogEntity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn category(&self) -> &str {
        self.category
    }

    fn price(&self) -> Price {
        self.price
    }
}
