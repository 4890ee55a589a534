use super::output::{Tone, ToneOutput};
use crate::constants::{BGM_NOTE_GATE, BGM_TEMPO_SECONDS};
use crate::scheduler::RepeatingTask;
use std::time::{Duration, Instant};

/// Town theme, one entry per step in Hz. Zero is a rest.
pub const MELODY: [f32; 16] = [
    261.63, 293.66, 329.63, 392.00, // C4 D4 E4 G4
    329.63, 392.00, 523.25, 392.00, // E4 G4 C5 G4
    349.23, 329.63, 293.66, 261.63, // F4 E4 D4 C4
    293.66, 329.63, 293.66, 0.0, // D4 E4 D4 rest
];

/// Loops [`MELODY`] while playing.
pub struct Sequencer {
    output: Box<dyn ToneOutput>,
    tempo: Duration,
    playing: bool,
    scheduled: Vec<Tone>,
    rearm: Option<RepeatingTask>,
}

impl Sequencer {
    pub fn new(output: Box<dyn ToneOutput>) -> Self {
        Self::with_tempo(output, Duration::from_secs_f64(BGM_TEMPO_SECONDS))
    }

    pub fn with_tempo(output: Box<dyn ToneOutput>, tempo: Duration) -> Self {
        Self {
            output,
            tempo,
            playing: false,
            scheduled: Vec::new(),
            rearm: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Tones handed to the output that have not been cleared yet.
    pub fn scheduled_tones(&self) -> &[Tone] {
        &self.scheduled
    }

    /// Length of one pass through the melody.
    pub fn loop_length(&self) -> Duration {
        self.tempo * MELODY.len() as u32
    }

    /// Flips playback and returns the new state.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.playing {
            self.stop();
        } else {
            self.play(now);
        }
        self.playing
    }

    /// Starts the loop from the current output clock. Only call this in
    /// response to a user action.
    pub fn play(&mut self, now: Instant) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.schedule_pass();
        let length = self.loop_length();
        self.rearm = Some(RepeatingTask::new(now + length, length));
        log::debug!("Background music started");
    }

    /// Stops immediately: the rearm timer is cancelled and queued tones are cut.
    pub fn stop(&mut self) {
        self.playing = false;
        if let Some(task) = self.rearm.take() {
            task.cancel();
        }
        if let Err(e) = self.output.silence() {
            log::debug!("Ignoring failed tone stop: {}", e);
        }
        self.scheduled.clear();
        log::debug!("Background music stopped");
    }

    /// Queues the next pass when the previous one has run out.
    pub fn tick(&mut self, now: Instant) {
        if !self.playing {
            return;
        }
        let due = self.rearm.as_mut().map_or(0, |task| task.poll(now));
        if due > 0 {
            self.schedule_pass();
        }
    }

    fn schedule_pass(&mut self) {
        let start = self.output.clock();
        self.scheduled.retain(|tone| tone.end() > start);

        let gate = self.tempo.mul_f64(BGM_NOTE_GATE);
        let tones: Vec<Tone> = MELODY
            .iter()
            .enumerate()
            .filter(|(_, freq)| **freq > 0.0)
            .map(|(step, freq)| Tone {
                frequency: *freq,
                start: start + self.tempo * step as u32,
                duration: gate,
            })
            .collect();

        match self.output.schedule(&tones) {
            Ok(()) => self.scheduled.extend(tones),
            Err(e) => log::warn!("Could not queue background music: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LocalQuestError, Result};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recording {
        clock: Duration,
        batches: Vec<Vec<Tone>>,
        silenced: u32,
        fail_silence: bool,
    }

    /// Output that records what it was asked to do.
    #[derive(Clone, Default)]
    struct RecordingOutput(Rc<RefCell<Recording>>);

    impl ToneOutput for RecordingOutput {
        fn clock(&self) -> Duration {
            self.0.borrow().clock
        }

        fn schedule(&mut self, tones: &[Tone]) -> Result<()> {
            self.0.borrow_mut().batches.push(tones.to_vec());
            Ok(())
        }

        fn silence(&mut self) -> Result<()> {
            let mut rec = self.0.borrow_mut();
            rec.silenced += 1;
            if rec.fail_silence {
                return Err(LocalQuestError::Audio("device gone".to_string()));
            }
            Ok(())
        }
    }

    fn sequencer() -> (Sequencer, RecordingOutput) {
        let output = RecordingOutput::default();
        (Sequencer::new(Box::new(output.clone())), output)
    }

    #[test]
    fn test_starts_stopped() {
        let (seq, output) = sequencer();
        assert!(!seq.is_playing());
        assert!(output.0.borrow().batches.is_empty());
    }

    #[test]
    fn test_play_schedules_one_pass() {
        let (mut seq, output) = sequencer();
        output.0.borrow_mut().clock = Duration::from_secs(10);
        seq.play(Instant::now());

        let rec = output.0.borrow();
        assert_eq!(rec.batches.len(), 1);
        let tones = &rec.batches[0];
        // 15 notes and one rest
        assert_eq!(tones.len(), 15);
        assert_eq!(tones[0].start, Duration::from_secs(10));
        assert_eq!(tones[0].frequency, 261.63);
        assert_eq!(tones[1].start, Duration::from_secs(10) + Duration::from_millis(200));
        assert_eq!(tones[0].duration, Duration::from_millis(160));
        assert_eq!(seq.scheduled_tones().len(), 15);
        assert_eq!(seq.loop_length(), Duration::from_millis(3200));
    }

    #[test]
    fn test_loop_rearms_after_each_pass() {
        let (mut seq, output) = sequencer();
        let start = Instant::now();
        seq.play(start);

        seq.tick(start + Duration::from_millis(3000));
        assert_eq!(output.0.borrow().batches.len(), 1);

        seq.tick(start + Duration::from_millis(3200));
        assert_eq!(output.0.borrow().batches.len(), 2);

        seq.tick(start + Duration::from_millis(6400));
        assert_eq!(output.0.borrow().batches.len(), 3);
    }

    #[test]
    fn test_stop_cancels_pending_tones_and_loop() {
        let (mut seq, output) = sequencer();
        let start = Instant::now();
        seq.play(start);
        seq.stop();

        assert!(!seq.is_playing());
        assert!(seq.scheduled_tones().is_empty());
        assert_eq!(output.0.borrow().silenced, 1);

        seq.tick(start + Duration::from_secs(60));
        assert_eq!(output.0.borrow().batches.len(), 1);
    }

    #[test]
    fn test_toggle_flips_state() {
        let (mut seq, _output) = sequencer();
        let now = Instant::now();
        assert!(seq.toggle(now));
        assert!(seq.is_playing());
        assert!(!seq.toggle(now));
        assert!(!seq.is_playing());
        assert!(seq.toggle(now));
    }

    #[test]
    fn test_failed_silence_is_ignored() {
        let (mut seq, output) = sequencer();
        output.0.borrow_mut().fail_silence = true;
        seq.play(Instant::now());
        seq.stop();
        assert!(!seq.is_playing());
        assert!(seq.scheduled_tones().is_empty());
    }

    #[test]
    fn test_finished_tones_are_pruned() {
        let (mut seq, output) = sequencer();
        let start = Instant::now();
        seq.play(start);
        output.0.borrow_mut().clock = Duration::from_secs(100);
        seq.tick(start + seq.loop_length());
        assert_eq!(seq.scheduled_tones().len(), 15);
    }
}
