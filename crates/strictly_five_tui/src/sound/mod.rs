//! Sound cue playback.
//!
//! With the `speaker` feature, cues are synthesized and played on the
//! default audio device at their configured volumes. Without it, or when
//! no device opens, the terminal bell stands in.

mod bell;
mod queue;
#[cfg(feature = "speaker")]
mod speaker;
pub mod tone;

pub use bell::TerminalBell;
pub use queue::{SampleFeed, SampleQueue, sample_queue};
#[cfg(feature = "speaker")]
pub use speaker::{AudioError, Speaker};

use crate::config::SoundSettings;
use strictly_five::{Silent, SoundPlayer};

/// Builds the sound player for `settings`: nothing when sound is off,
/// the audio device when one opens, otherwise the terminal bell.
pub fn open_player(settings: &SoundSettings) -> Box<dyn SoundPlayer> {
    if !*settings.enabled() {
        return Box::new(Silent);
    }
    device_player(settings).unwrap_or_else(|| Box::new(TerminalBell::stdout(settings)))
}

#[cfg(feature = "speaker")]
fn device_player(settings: &SoundSettings) -> Option<Box<dyn SoundPlayer>> {
    match Speaker::open(settings) {
        Ok(speaker) => Some(Box::new(speaker)),
        Err(e) => {
            tracing::warn!(error = %e, "No audio output, using terminal bell");
            None
        }
    }
}

#[cfg(not(feature = "speaker"))]
fn device_player(_settings: &SoundSettings) -> Option<Box<dyn SoundPlayer>> {
    None
}
