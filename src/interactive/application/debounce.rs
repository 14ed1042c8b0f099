use std::time::{Duration, Instant};

/// A restartable deadline. Scheduling again before it fires pushes the
/// deadline out, so a burst of triggers fires once.
#[derive(Debug, Default, Clone)]
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, DELAY);

        assert!(!debouncer.fire_if_due(start + Duration::from_millis(299)));
        assert!(debouncer.fire_if_due(start + DELAY));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_reschedule_restarts_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, DELAY);
        debouncer.schedule(start + Duration::from_millis(200), DELAY);

        // The first deadline would have passed here.
        assert!(!debouncer.fire_if_due(start + Duration::from_millis(350)));
        assert!(debouncer.fire_if_due(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, DELAY);
        debouncer.cancel();
        assert!(!debouncer.fire_if_due(start + DELAY));
    }
}
