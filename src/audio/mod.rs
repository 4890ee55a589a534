//! Background music.
//!
//! A [`Sequencer`] loops a short town theme through a [`ToneOutput`]. The
//! speaker backend needs the `audio` feature; everything else falls back to
//! [`SilentOutput`].

mod output;
mod sequencer;
#[cfg(feature = "audio")]
mod speaker;

pub use output::{SilentOutput, Tone, ToneOutput};
pub use sequencer::{Sequencer, MELODY};
#[cfg(feature = "audio")]
pub use speaker::SpeakerOutput;

/// Opens the best available output. Never fails: without a device the music
/// simply does not play.
pub fn open_output(volume: f32) -> Box<dyn ToneOutput> {
    #[cfg(feature = "audio")]
    {
        match SpeakerOutput::open(volume) {
            Ok(speaker) => return Box::new(speaker),
            Err(e) => log::warn!("Background music disabled: {}", e),
        }
    }
    #[cfg(not(feature = "audio"))]
    {
        let _ = volume;
        log::debug!("Built without audio support; background music is silent");
    }
    Box::new(SilentOutput::new())
}
