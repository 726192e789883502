//! 1OrganicHair - terminal storefront and booking kiosk
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use organic_hair::config::{default_config_path, init_config_file, load_settings, ThemeMode};

/// 1OrganicHair - terminal storefront and booking kiosk
#[derive(Parser, Debug)]
#[command(name = "organic-hair")]
#[command(about = "Terminal storefront and booking kiosk for the 1OrganicHair salon", long_about = None)]
struct Args {
    /// Path to the TOML settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in the given theme (light or dark), overriding the settings file
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Write a commented default settings file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(default_config_path);

    if args.init_config {
        if init_config_file(&config_path)? {
            eprintln!("Created settings file: {}", config_path.display());
        } else {
            eprintln!("Settings file already exists: {}", config_path.display());
        }
        return Ok(());
    }

    let mut settings = load_settings(&config_path);
    if let Some(theme) = args.theme {
        settings.ui.theme = theme;
    }

    organic_hair::run(settings).await?;
    Ok(())
}
