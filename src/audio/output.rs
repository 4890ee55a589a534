use crate::error::Result;
use std::time::{Duration, Instant};

/// One note on the output's clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    /// Offset from the output clock's origin
    pub start: Duration,
    pub duration: Duration,
}

impl Tone {
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }
}

/// Something that can play scheduled tones.
pub trait ToneOutput {
    /// Current position of the output clock.
    fn clock(&self) -> Duration;

    /// Queues tones. They are given in start order.
    fn schedule(&mut self, tones: &[Tone]) -> Result<()>;

    /// Cuts every queued or sounding tone.
    fn silence(&mut self) -> Result<()>;
}

/// Output with a real clock and no sound.
#[derive(Debug)]
pub struct SilentOutput {
    origin: Instant,
}

impl SilentOutput {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SilentOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneOutput for SilentOutput {
    fn clock(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule(&mut self, _tones: &[Tone]) -> Result<()> {
        Ok(())
    }

    fn silence(&mut self) -> Result<()> {
        Ok(())
    }
}
