//! Lock-free hand-off of rendered samples to the audio callback.

use rtrb::{Consumer, Producer, RingBuffer};

/// Creates a queue holding up to `capacity` mono samples.
pub fn sample_queue(capacity: usize) -> (SampleQueue, SampleFeed) {
    let (producer, consumer) = RingBuffer::new(capacity);
    (SampleQueue { producer }, SampleFeed { consumer })
}

/// Game-thread end of the queue.
pub struct SampleQueue {
    producer: Producer<f32>,
}

impl SampleQueue {
    /// Queues as many of `samples` as fit and returns how many did.
    pub fn push(&mut self, samples: &[f32]) -> usize {
        samples
            .iter()
            .take_while(|sample| self.producer.push(**sample).is_ok())
            .count()
    }
}

/// Audio-callback end of the queue. Never allocates or blocks.
pub struct SampleFeed {
    consumer: Consumer<f32>,
}

impl SampleFeed {
    /// Fills an interleaved buffer of `channels` channels, copying each
    /// queued mono sample to every channel of its frame. Plays silence once
    /// the queue runs dry.
    pub fn fill(&mut self, data: &mut [f32], channels: usize) {
        for frame in data.chunks_mut(channels.max(1)) {
            let sample = self.consumer.pop().unwrap_or(0.0);
            frame.fill(sample);
        }
    }
}
