use std::time::{Duration, Instant};

/// Single-slot quiescence window over a rapidly changing input.
///
/// `arm` replaces any pending deadline, so arbitrarily fast successive
/// updates collapse into one eventual firing once the input has been quiet
/// for the full window. `poll` fires at most once per settling period.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Restarts the wait from `now`. Any previously armed deadline is
    /// abandoned.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Abandons the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the armed deadline has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
