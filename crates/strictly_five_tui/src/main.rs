//! Strictly Five - terminal 5x5 tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_five_tui::{App, Cli, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    let settings = cli.apply(settings);

    init_tracing(settings.ui().log_file())?;
    info!(?settings, "Starting Strictly Five");

    let sound = strictly_five_tui::open_player(settings.sound());
    strictly_five_tui::run(App::new(sound, settings.ui()))
}

/// Sends logs to a file so they don't draw over the game.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Only fails if a subscriber is already installed
    Ok(())
}
