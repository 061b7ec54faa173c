//! Settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_five::SoundCue;
use tracing::{debug, info, instrument};

/// Sound preferences.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    /// Master switch for all cues.
    enabled: bool,
    /// Loudness of the move cue, from 0.0 (muted) to 1.0.
    move_volume: f32,
    /// Loudness of the game-over cue, from 0.0 (muted) to 1.0.
    game_over_volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            move_volume: 0.5,
            game_over_volume: 0.2,
        }
    }
}

impl SoundSettings {
    /// Playback volume for `cue`, 0.0 when sound is switched off.
    pub fn volume(&self, cue: SoundCue) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        match cue {
            SoundCue::Move => self.move_volume,
            SoundCue::GameOver => self.game_over_volume,
        }
    }

    /// Whether `cue` makes any sound at all.
    pub fn audible(&self, cue: SoundCue) -> bool {
        self.volume(cue) > 0.0
    }
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Show the next mark, dimmed, on the empty square under the cursor.
    hover_preview: bool,
    /// Where log output goes while the terminal is taken over.
    log_file: PathBuf,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            hover_preview: true,
            log_file: PathBuf::from("strictly_five.log"),
        }
    }
}

/// All user settings.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound preferences.
    sound: SoundSettings,
    /// Display preferences.
    ui: UiSettings,
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(?settings, "Config loaded successfully");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Turns every sound cue off.
    pub fn mute(&mut self) {
        self.sound.enabled = false;
    }

    /// Sends log output to `path`.
    pub fn set_log_file(&mut self, path: PathBuf) {
        self.ui.log_file = path;
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, volume) in [
            ("move_volume", self.sound.move_volume),
            ("game_over_volume", self.sound.game_over_volume),
        ] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::new(format!(
                    "sound.{} must be between 0.0 and 1.0, got {}",
                    name, volume
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
