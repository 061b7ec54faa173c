//! Cues played on the default audio output device.

use super::queue::{SampleQueue, sample_queue};
use super::tone;
use crate::config::SoundSettings;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use derive_more::{Display, Error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use strictly_five::{SoundCue, SoundPlayer};
use tracing::{debug, error, info, instrument, warn};

/// Seconds of audio the sample queue can hold.
const QUEUE_SECONDS: usize = 2;

/// Audio output error.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error.
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

/// Plays synthesized cues on the default output device, each at its
/// configured volume.
///
/// The cpal stream lives on its own thread. Cues reach it through a
/// lock-free sample queue, so playing never blocks the game loop.
pub struct Speaker {
    queue: SampleQueue,
    sample_rate: u32,
    move_volume: f32,
    game_over_volume: f32,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

type Ready = Result<(SampleQueue, u32), AudioError>;

impl Speaker {
    /// Opens the default output device and starts its stream.
    #[instrument(skip(settings))]
    pub fn open(settings: &SoundSettings) -> Result<Self, AudioError> {
        let stop = Arc::new(AtomicBool::new(false));
        let (ready_tx, ready_rx) = mpsc::sync_channel::<Ready>(1);

        let thread_stop = Arc::clone(&stop);
        let thread = thread::Builder::new()
            .name("strictly-five-audio".to_string())
            .spawn(move || run_output(ready_tx, thread_stop))
            .map_err(|e| AudioError::new(format!("Failed to start audio thread: {}", e)))?;

        let (queue, sample_rate) = match ready_rx.recv() {
            Ok(Ok(ready)) => ready,
            Ok(Err(e)) => {
                let _ = thread.join();
                return Err(e);
            }
            Err(_) => {
                let _ = thread.join();
                return Err(AudioError::new(
                    "Audio thread exited during setup".to_string(),
                ));
            }
        };
        info!(sample_rate, "Audio output ready");

        Ok(Self {
            queue,
            sample_rate,
            move_volume: settings.volume(SoundCue::Move),
            game_over_volume: settings.volume(SoundCue::GameOver),
            stop,
            thread: Some(thread),
        })
    }

    fn enqueue(&mut self, cue: SoundCue, volume: f32) {
        if volume <= 0.0 {
            return;
        }
        let samples = tone::render(cue, volume, self.sample_rate);
        let queued = self.queue.push(&samples);
        if queued < samples.len() {
            warn!(%cue, dropped = samples.len() - queued, "Audio queue full, cue cut short");
        } else {
            debug!(%cue, samples = queued, "Cue queued");
        }
    }
}

impl SoundPlayer for Speaker {
    fn play_move(&mut self) {
        self.enqueue(SoundCue::Move, self.move_volume);
    }

    fn play_game_over(&mut self) {
        self.enqueue(SoundCue::GameOver, self.game_over_volume);
    }
}

impl Drop for Speaker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            error!("Audio thread panicked");
        }
    }
}

/// Audio thread body: opens the stream, reports back, then keeps the
/// stream alive until told to stop.
fn run_output(ready: mpsc::SyncSender<Ready>, stop: Arc<AtomicBool>) {
    let stream = match open_stream() {
        Ok((stream, queue, sample_rate)) => {
            if ready.send(Ok((queue, sample_rate))).is_err() {
                return;
            }
            stream
        }
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    while !stop.load(Ordering::Acquire) {
        thread::sleep(Duration::from_millis(50));
    }

    drop(stream);
    debug!("Audio stream stopped");
}

fn open_stream() -> Result<(cpal::Stream, SampleQueue, u32), AudioError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| AudioError::new("No audio output device found".to_string()))?;

    let config = device
        .default_output_config()
        .map_err(|e| AudioError::new(format!("Failed to get audio config: {}", e)))?;
    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(AudioError::new(format!(
            "Unsupported sample format {:?}",
            config.sample_format()
        )));
    }

    let channels = config.channels() as usize;
    let sample_rate = config.sample_rate().0;
    let (queue, mut feed) = sample_queue(sample_rate as usize * QUEUE_SECONDS);

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| feed.fill(data, channels),
            |err| error!(error = %err, "Audio output stream error"),
            None,
        )
        .map_err(|e| AudioError::new(format!("Failed to build stream: {}", e)))?;
    stream
        .play()
        .map_err(|e| AudioError::new(format!("Failed to play stream: {}", e)))?;

    Ok((stream, queue, sample_rate))
}
