//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "ORGANIC_HAIR_LOG";

const LOG_FILE_PREFIX: &str = "organic-hair.log";

const DEFAULT_FILTER: &str = "organic_hair=info,salon_app=info,salon_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/organic-hair/logs/` since the
/// terminal itself is owned by the UI.
/// Log level is controlled by the `ORGANIC_HAIR_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ORGANIC_HAIR_LOG=debug cargo run
/// ORGANIC_HAIR_LOG=salon_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    for line in startup_banner() {
        tracing::info!("{}", line);
    }

    Ok(())
}

/// Lines logged once per process when logging comes up
fn startup_banner() -> [String; 4] {
    let rule = "═".repeat(55);
    [
        rule.clone(),
        "1OrganicHair kiosk starting".to_string(),
        format!("Log file: {}.<date>", get_current_log_file().display()),
        rule,
    ]
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("organic-hair").join("logs")
}

/// Log file path prefix; the appender adds a date suffix
fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_PREFIX)
}
