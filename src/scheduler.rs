//! Repeating timers driven from the main loop.
//!
//! The main loop owns the clock: it calls [`RepeatingTask::poll`] with the
//! current instant on every pass. Nothing reschedules itself behind the
//! loop's back, so cancelling a task is just flipping its token.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shared cancel flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Fires every `interval`, starting at `first_due`.
#[derive(Debug, Clone)]
pub struct RepeatingTask {
    interval: Duration,
    next_due: Instant,
    token: CancellationToken,
}

impl RepeatingTask {
    pub fn new(first_due: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next_due: first_due,
            token: CancellationToken::new(),
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Returns how many firings are due at `now` and advances past them.
    /// A slow frame catches up in one call. Cancelled tasks never fire.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.is_cancelled() || now < self.next_due {
            return 0;
        }

        if self.interval.is_zero() {
            self.next_due = now;
            return 1;
        }

        let behind = now.duration_since(self.next_due);
        let fired = (behind.as_nanos() / self.interval.as_nanos()) as u32 + 1;
        self.next_due += self.interval * fired;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_not_due_before_first_deadline() {
        let start = Instant::now();
        let mut task = RepeatingTask::new(start + 500 * MS, 50 * MS);
        assert_eq!(task.poll(start), 0);
        assert_eq!(task.poll(start + 499 * MS), 0);
    }

    #[test]
    fn test_fires_on_each_interval() {
        let start = Instant::now();
        let mut task = RepeatingTask::new(start + 500 * MS, 50 * MS);
        assert_eq!(task.poll(start + 500 * MS), 1);
        assert_eq!(task.poll(start + 520 * MS), 0);
        assert_eq!(task.poll(start + 550 * MS), 1);
        assert_eq!(task.next_due(), start + 600 * MS);
    }

    #[test]
    fn test_catches_up_after_slow_frame() {
        let start = Instant::now();
        let mut task = RepeatingTask::new(start, 50 * MS);
        assert_eq!(task.poll(start + 175 * MS), 4);
        assert_eq!(task.next_due(), start + 200 * MS);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let start = Instant::now();
        let mut task = RepeatingTask::new(start, 50 * MS);
        let token = task.token();
        token.cancel();
        assert!(task.is_cancelled());
        assert_eq!(task.poll(start + 1000 * MS), 0);
    }
}
