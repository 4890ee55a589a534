//! The king's greeting shown the first time the game is launched.

use crate::config::OpeningConfig;
use crate::scheduler::RepeatingTask;
use std::time::Instant;

pub const OPENING_SPEAKER: &str = "The King";

pub const OPENING_TEXT: &str = "Welcome, young hero!\n\
This town is overflowing with\n\
all sorts of troubles right now.\n\
Will you lend your strength\n\
to help the people of the town?";

/// Typewriter reveal of [`OPENING_TEXT`].
#[derive(Debug, Clone)]
pub struct OpeningScene {
    chars: Vec<char>,
    revealed: usize,
    typer: RepeatingTask,
}

impl OpeningScene {
    pub fn new(now: Instant, config: &OpeningConfig) -> Self {
        Self::with_text(OPENING_TEXT, now, config)
    }

    pub fn with_text(text: &str, now: Instant, config: &OpeningConfig) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            typer: RepeatingTask::new(now + config.start_delay(), config.char_interval()),
        }
    }

    /// Reveals whatever characters are due.
    pub fn tick(&mut self, now: Instant) {
        let due = self.typer.poll(now) as usize;
        if due > 0 {
            self.revealed = (self.revealed + due).min(self.chars.len());
            if self.is_finished() {
                self.typer.cancel();
            }
        }
    }

    /// Shows the whole message at once.
    pub fn skip(&mut self) {
        self.revealed = self.chars.len();
        self.typer.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}
