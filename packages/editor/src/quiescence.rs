//! Cancel-and-restart timer driven by caller-supplied time

/// Fires once `delay_ms` have elapsed since the last restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuiescenceTimer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl QuiescenceTimer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Drop any pending deadline and start over from `now_ms`
    pub fn restart(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Whether a pending deadline has passed
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.deadline.is_some_and(|deadline| now_ms >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_pushes_deadline() {
        let mut timer = QuiescenceTimer::new(800);
        assert!(!timer.is_due(10_000));

        timer.restart(0);
        timer.restart(500);
        assert!(!timer.is_due(1_000));
        assert!(timer.is_due(1_300));

        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.is_due(5_000));
    }
}
