//! Synthesized cue sounds.
//!
//! A move is a short high click and game over is a falling three-note
//! chime. Both are plain sine notes with short linear fades so they start
//! and stop without popping.

use std::f32::consts::TAU;
use strictly_five::SoundCue;

/// Loudest sample any cue reaches at volume 1.0.
pub const PEAK: f32 = 0.8;

const FADE_SECONDS: f32 = 0.005;

/// One sine note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Pitch in hertz.
    pub frequency: f32,
    /// Length in seconds.
    pub seconds: f32,
}

const CLICK: [Note; 1] = [Note {
    frequency: 1046.5,
    seconds: 0.045,
}];

const CHIME: [Note; 3] = [
    Note {
        frequency: 783.99,
        seconds: 0.14,
    },
    Note {
        frequency: 659.25,
        seconds: 0.14,
    },
    Note {
        frequency: 523.25,
        seconds: 0.28,
    },
];

/// Notes that make up `cue`.
pub fn notes(cue: SoundCue) -> &'static [Note] {
    match cue {
        SoundCue::Move => &CLICK,
        SoundCue::GameOver => &CHIME,
    }
}

/// Renders `cue` as mono samples at `sample_rate`, every sample scaled by
/// `volume` (clamped to 0.0..=1.0).
pub fn render(cue: SoundCue, volume: f32, sample_rate: u32) -> Vec<f32> {
    let gain = PEAK * volume.clamp(0.0, 1.0);
    notes(cue)
        .iter()
        .flat_map(|note| note_samples(*note, gain, sample_rate))
        .collect()
}

fn note_samples(note: Note, gain: f32, sample_rate: u32) -> impl Iterator<Item = f32> {
    let rate = sample_rate as f32;
    let len = (note.seconds * rate) as usize;
    let fade = ((FADE_SECONDS * rate) as usize).max(1);

    (0..len).map(move |i| {
        let edge = i.min(len - 1 - i);
        let envelope = (edge as f32 / fade as f32).min(1.0);
        gain * envelope * (TAU * note.frequency * i as f32 / rate).sin()
    })
}
