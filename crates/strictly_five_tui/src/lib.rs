//! Terminal front end for Strictly Five.
//!
//! Draws the board with `ratatui`, turns mouse clicks and key presses
//! into game actions, and plays the sound cues on the audio device or the
//! terminal bell.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod sound;
mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, Settings, SoundSettings, UiSettings};
pub use input::{KeyAction, key_action, move_cursor};
pub use sound::{SampleFeed, SampleQueue, TerminalBell, open_player, sample_queue, tone};
#[cfg(feature = "speaker")]
pub use sound::{AudioError, Speaker};
pub use terminal::run;
