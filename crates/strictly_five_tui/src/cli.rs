//! Command-line interface for strictly_five.

use crate::config::Settings;
use clap::Parser;
use std::path::PathBuf;

/// Strictly Five - five-in-a-row tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_five")]
#[command(about = "5x5 tic-tac-toe for two players at one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "strictly_five.toml")]
    pub config: PathBuf,

    /// Play without sound
    #[arg(long)]
    pub mute: bool,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of loaded settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if self.mute {
            settings.mute();
        }
        if let Some(path) = &self.log_file {
            settings.set_log_file(path.clone());
        }
        settings
    }
}
