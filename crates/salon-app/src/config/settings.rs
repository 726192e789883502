//! Settings parser for config.toml

use super::types::Settings;
use salon_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "organic-hair";

/// Default location: `<config dir>/organic-hair/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from a config file
///
/// A missing, unreadable or malformed file yields the defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
///
/// Returns `true` if a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    let default_content = r#"# 1OrganicHair kiosk configuration

[ui]
# Color scheme at startup: "light" or "dark"
theme = "light"

[booking]
# WhatsApp number (international format, digits only) receiving bookings
whatsapp_number = "351964277807"
# Message pre-filled in the chat
greeting = "Olá! Vi o site e gostaria de agendar um horário no 1OrganicHair."
# Browser used to open the booking link (empty = system default)
browser = ""

[notifications]
# How long a notification stays on screen (milliseconds)
duration_ms = 4000
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(true)
}
