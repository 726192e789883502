//! salon-tui - Terminal UI for the 1OrganicHair salon kiosk
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! `AppState` from salon-app and adds terminal rendering, event polling and
//! widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
