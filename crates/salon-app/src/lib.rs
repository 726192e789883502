//! salon-app - Application state and orchestration for the 1OrganicHair kiosk
//!
//! This crate implements the TEA (The Elm Architecture) pattern: `AppState`
//! is the model, [`Message`] the events and [`update`] the pure transition
//! function. Side effects leave the state machine as [`UpdateAction`]s.
//!
//! The navigation controller ([`navigation`]), view registry ([`registry`]),
//! modal/form session ([`modal`], [`form`]) and notification sink
//! ([`notifications`]) are usable on their own, independent of any UI.

pub mod actions;
pub mod booking;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod modal;
pub mod navigation;
pub mod notifications;
pub mod pages;
pub mod process;
pub mod registry;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use modal::{ModalKind, ModalSession};
pub use navigation::Session;
pub use registry::{ViewDescriptor, ViewRegistry};
pub use state::{AppState, UiMode};
