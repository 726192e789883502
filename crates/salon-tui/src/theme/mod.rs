//! Centralized theme system for the earthy storefront design.
//!
//! This module provides:
//! - `palette` - Light and dark color palettes
//! - `styles` - Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
