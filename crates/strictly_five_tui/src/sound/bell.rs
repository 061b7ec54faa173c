//! Terminal bell fallback.

use crate::config::SoundSettings;
use std::io::{self, Write};
use strictly_five::{SoundCue, SoundPlayer};
use tracing::{instrument, warn};

const BEL: u8 = 0x07;

/// Plays cues by ringing the terminal bell: once for a move, twice for
/// game over.
///
/// Used when no audio device can be opened. The bell has no loudness, so a
/// cue either rings or, at volume 0.0, stays silent. Write failures are
/// logged and dropped.
#[derive(Debug)]
pub struct TerminalBell<W> {
    out: W,
    move_audible: bool,
    game_over_audible: bool,
}

impl TerminalBell<io::Stdout> {
    /// Rings the bell of the terminal on standard output.
    pub fn stdout(settings: &SoundSettings) -> Self {
        Self::new(io::stdout(), settings)
    }
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(out: W, settings: &SoundSettings) -> Self {
        Self {
            out,
            move_audible: settings.audible(SoundCue::Move),
            game_over_audible: settings.audible(SoundCue::GameOver),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    #[instrument(skip(self))]
    fn ring(&mut self, cue: SoundCue, times: usize) {
        let result = self
            .out
            .write_all(&[BEL].repeat(times))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, %cue, "Failed to ring terminal bell");
        }
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play_move(&mut self) {
        if self.move_audible {
            self.ring(SoundCue::Move, 1);
        }
    }

    fn play_game_over(&mut self) {
        if self.game_over_audible {
            self.ring(SoundCue::GameOver, 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_cues_ring_distinctly() {
        let settings = Settings::default();
        let mut bell = TerminalBell::new(Vec::new(), settings.sound());
        bell.play_move();
        bell.play_game_over();
        assert_eq!(bell.into_inner(), vec![BEL, BEL, BEL]);
    }

    #[test]
    fn test_muted_rings_nothing() {
        let mut settings = Settings::default();
        settings.mute();
        let mut bell = TerminalBell::new(Vec::new(), settings.sound());
        bell.play_move();
        bell.play_game_over();
        assert!(bell.into_inner().is_empty());
    }

    #[test]
    fn test_zero_volume_mutes_one_cue() {
        let settings = Settings::from_toml("[sound]\ngame_over_volume = 0.0\n").unwrap();
        let mut bell = TerminalBell::new(Vec::new(), settings.sound());
        bell.play_game_over();
        bell.play_move();
        assert_eq!(bell.into_inner(), vec![BEL]);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let settings = Settings::default();
        let mut bell = TerminalBell::new(BrokenPipe, settings.sound());
        bell.play_move();
        bell.play_game_over();
    }
}
