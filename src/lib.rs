//! 1OrganicHair - terminal storefront and booking kiosk
//!
//! The binary is a thin wrapper around [`run`]; the domain lives in the
//! workspace crates:
//!
//! - `salon-core` - catalog, view ids, filter, errors and logging
//! - `salon-app` - navigation controller, dialogs, settings and the TEA loop
//! - `salon-tui` - ratatui rendering and terminal event polling

use salon_app::config::Settings;
use salon_core::prelude::*;

pub use salon_app::config;

/// Main application entry point with already-resolved settings
pub async fn run(settings: Settings) -> Result<()> {
    // Initialize logging (to file, since the TUI owns stdout)
    salon_core::logging::init()?;

    let result = salon_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("1OrganicHair kiosk exiting");
    result
}
