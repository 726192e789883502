//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use salon_app::config::Settings;
use salon_app::message::Message;
use salon_app::process::process_message;
use salon_app::signals;
use salon_app::AppState;
use salon_core::prelude::*;

use super::{event, render, terminal};

/// Run the kiosk until the user quits or a termination signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting kiosk: theme={:?}, booking number={}",
        settings.ui.theme, settings.booking.whatsapp_number
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings);

    // Unified channel for messages produced outside the key loop
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));
    info!("Kiosk stopped");

    // A loop failure takes precedence over a restore failure
    result.and(restored)
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // External messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
