//! Configuration file parsing for the salon kiosk
//!
//! Supports a single `config.toml` under the user config directory, or a path
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
