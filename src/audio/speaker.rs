//! Speaker backend built on rodio.

use super::output::{Tone, ToneOutput};
use crate::error::{LocalQuestError, Result};
use rodio::source::{Source, Zero};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::time::{Duration, Instant};

const SAMPLE_RATE: u32 = 44_100;

/// Retro square wave.
struct SquareWave {
    frequency: f32,
    sample: u64,
}

impl SquareWave {
    fn new(frequency: f32) -> Self {
        Self {
            frequency,
            sample: 0,
        }
    }
}

impl Iterator for SquareWave {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.sample = self.sample.wrapping_add(1);
        let phase = (self.sample as f32 * self.frequency / SAMPLE_RATE as f32).fract();
        Some(if phase < 0.5 { 1.0 } else { -1.0 })
    }
}

impl Source for SquareWave {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// Plays tones on the default output device. Tones are queued back to back
/// with silence filling the gaps between them.
pub struct SpeakerOutput {
    // Dropping the stream closes the device
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,
    volume: f32,
    origin: Instant,
    queued_until: Option<Duration>,
}

impl SpeakerOutput {
    pub fn open(volume: f32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| LocalQuestError::Audio(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| LocalQuestError::Audio(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            sink,
            volume,
            origin: Instant::now(),
            queued_until: None,
        })
    }

    fn append_rest(&self, length: Duration) {
        if !length.is_zero() {
            self.sink
                .append(Zero::<f32>::new(1, SAMPLE_RATE).take_duration(length));
        }
    }
}

impl ToneOutput for SpeakerOutput {
    fn clock(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule(&mut self, tones: &[Tone]) -> Result<()> {
        let now = self.clock();
        // Queue position: end of the previous batch, or now if it already ran out
        let mut cursor = match self.queued_until {
            Some(until) if until > now => until,
            _ => now,
        };

        for tone in tones {
            if tone.start > cursor {
                self.append_rest(tone.start - cursor);
                cursor = tone.start;
            }
            self.sink.append(
                SquareWave::new(tone.frequency)
                    .take_duration(tone.duration)
                    .amplify(self.volume),
            );
            cursor += tone.duration;
        }

        self.queued_until = Some(cursor);
        Ok(())
    }

    fn silence(&mut self) -> Result<()> {
        self.sink.stop();
        self.sink =
            Sink::try_new(&self.handle).map_err(|e| LocalQuestError::Audio(e.to_string()))?;
        self.queued_until = None;
        Ok(())
    }
}
