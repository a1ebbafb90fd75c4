//! Single-deadline debouncer for autosave.
//!
//! # Invariants
//! - At most one deadline is pending; rescheduling replaces it.
//! - A deadline fires at most once.
//! - Cancelling has no side effects besides clearing the deadline.

/// Delay between the last edit and the autosave attempt.
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 3_000;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replaces any pending deadline with `now + delay`.
    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Consumes the pending deadline if it has passed.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn burst_of_schedules_fires_once_after_last() {
        let mut debouncer = Debouncer::new(3_000);
        debouncer.schedule(0);
        debouncer.schedule(1_000);
        debouncer.schedule(2_000);

        assert!(!debouncer.fire_if_due(4_999));
        assert!(debouncer.fire_if_due(5_000));
        assert!(!debouncer.fire_if_due(9_000));
    }

    #[test]
    fn cancel_clears_pending_deadline() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule(10);
        assert_eq!(debouncer.deadline_ms(), Some(3_010));
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(u64::MAX));
    }
}
