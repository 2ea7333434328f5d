use std::time::{Duration, Instant};

/// A wall-clock time budget measured with a monotonic clock
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        self.budget
            .checked_sub(self.elapsed())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Deadline;
    use std::time::Duration;

    #[test]
    fn zero_budget_is_expired() {
        let deadline = Deadline::after(Duration::from_secs(0));
        assert!(deadline.is_expired());
        assert_eq!(Duration::from_secs(0), deadline.remaining());
    }

    #[test]
    fn long_budget_is_not_expired() {
        let deadline = Deadline::after(Duration::from_secs(3600));
        assert!(!deadline.is_expired());
        assert!(deadline.remaining() > Duration::from_secs(3500));
    }
}
