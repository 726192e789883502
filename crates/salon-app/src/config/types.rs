//! Configuration types for the salon kiosk
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `BookingSettings`, `NotificationSettings` - sections
//! - `ThemeMode` - light/dark preference

use serde::{Deserialize, Serialize};

/// Default WhatsApp number receiving booking requests
pub const DEFAULT_WHATSAPP_NUMBER: &str = "351964277807";

/// Default greeting pre-filled into the booking message
pub const DEFAULT_GREETING: &str =
    "Olá! Vi o site e gostaria de agendar um horário no 1OrganicHair.";

/// Global application settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub booking: BookingSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Light/dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}', expected light or dark", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Initial color scheme
    #[serde(default)]
    pub theme: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookingSettings {
    /// International number without `+` or spaces
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Message pre-filled in the chat
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Browser used to open the booking link (empty = system default)
    #[serde(default)]
    pub browser: String,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            greeting: default_greeting(),
            browser: String::new(),
        }
    }
}

fn default_whatsapp_number() -> String {
    DEFAULT_WHATSAPP_NUMBER.to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationSettings {
    /// How long a toast stays visible, in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

fn default_duration_ms() -> u64 {
    4000
}
