//! Side effects requested by the update function

use std::process::Command;

use salon_core::prelude::*;

use crate::handler::UpdateAction;

/// Execute an action returned by `update()`.
///
/// Effects are fire-and-forget: nothing is reported back to the state
/// machine, failures are only logged.
pub fn handle_action(action: UpdateAction) {
    match action {
        UpdateAction::OpenBookingLink { url, browser } => {
            info!("Opening booking link");
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url, &browser) {
                    let err = Error::external_open(e.to_string());
                    error!("{}", err);
                }
            });
        }
    }
}

/// Open `url` with the configured browser or the platform opener
fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
