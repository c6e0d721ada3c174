use std::time::{Duration, Instant};

/// Deadline timer for actions that should run once input activity pauses.
///
/// Each `schedule()` restarts the quiet period, so a burst of keystrokes
/// collapses into a single firing. Also used with a fixed delay for the
/// deferred dropdown hide on submit.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Timestamp of the last schedule() call
    last_input_time: Option<Instant>,
    /// Whether a firing is pending
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_input_time: None,
            pending: false,
        }
    }

    pub fn schedule(&mut self) {
        self.last_input_time = Some(Instant::now());
        self.pending = true;
    }

    pub fn should_fire(&self) -> bool {
        if !self.pending {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => last_time.elapsed() >= self.delay,
            None => false,
        }
    }

    pub fn mark_fired(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    #[allow(dead_code)] // Used in tests
    pub fn has_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
