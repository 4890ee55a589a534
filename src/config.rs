//! User settings loaded from `config.toml`.
//!
//! ```toml
//! [audio]
//! volume = 0.1
//! tempo_seconds = 0.2
//! autoplay_after_opening = true
//!
//! [opening]
//! start_delay_ms = 500
//! char_interval_ms = 50
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use crate::constants::{
    BGM_TEMPO_SECONDS, BGM_VOLUME, TYPEWRITER_CHAR_INTERVAL_MS, TYPEWRITER_START_DELAY_MS,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub opening: OpeningConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub volume: f32,
    /// Seconds per melody step
    pub tempo_seconds: f64,
    /// Start the music when the player leaves the opening screen
    pub autoplay_after_opening: bool,
    /// Never open the audio device. The music toggle does nothing.
    pub muted: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: BGM_VOLUME,
            tempo_seconds: BGM_TEMPO_SECONDS,
            autoplay_after_opening: true,
            muted: false,
        }
    }
}

impl AudioConfig {
    pub fn tempo(&self) -> Duration {
        // Guard against zero or negative values from hand-edited files
        Duration::from_secs_f64(self.tempo_seconds.max(0.01))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningConfig {
    pub start_delay_ms: u64,
    pub char_interval_ms: u64,
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: TYPEWRITER_START_DELAY_MS,
            char_interval_ms: TYPEWRITER_CHAR_INTERVAL_MS,
        }
    }
}

impl OpeningConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn char_interval(&self) -> Duration {
        Duration::from_millis(self.char_interval_ms)
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
