//! Audio capability injected into the game controller.
//!
//! The controller only signals cues. Assets, volume and playback errors all
//! belong to the implementation, which the hosting application builds once
//! at startup.

use serde::{Deserialize, Serialize};

/// A sound the game asks the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SoundCue {
    /// A mark was placed.
    #[display("move")]
    Move,
    /// The game reached a win or a draw.
    #[display("game over")]
    GameOver,
}

/// Fire-and-forget audio playback.
///
/// Implementations must not block and must swallow their own failures.
/// The controller never observes playback.
pub trait SoundPlayer {
    /// Plays the cue for a placed mark.
    fn play_move(&mut self);

    /// Plays the cue for the end of a game.
    fn play_game_over(&mut self);
}

/// Sound player that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play_move(&mut self) {}

    fn play_game_over(&mut self) {}
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for Box<T> {
    fn play_move(&mut self) {
        (**self).play_move();
    }

    fn play_game_over(&mut self) {
        (**self).play_game_over();
    }
}
