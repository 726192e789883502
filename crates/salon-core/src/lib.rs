//! # salon-core - Core Domain Types
//!
//! Foundation crate for the 1OrganicHair storefront. Provides the view
//! identifiers, catalog records and static data, the catalog filter,
//! notifications, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Views (`view`)
//! - [`View`] - The five top-level screens, with [`View::resolve`] as the
//!   single normalization policy for string identifiers
//!
//! ### Catalog (`catalog`, `filter`)
//! - [`Service`], [`Product`] - Immutable catalog records
//! - [`CatalogEntity`] - Shared read-only accessors
//! - [`Criterion`], [`filter()`] - Category / name-substring filtering
//!
//! ### Notifications (`notification`)
//! - [`Notification`], [`Severity`] - Toast payloads
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use salon_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod notification;
pub mod prelude;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CatalogEntity, Price, Product, ProductId, Service, ServiceId, ALL_CATEGORIES};
pub use error::{Error, Result, ResultExt};
pub use filter::{filter, Criterion};
pub use notification::{Notification, Severity};
pub use view::View;
