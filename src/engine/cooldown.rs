// Cooldown timers polled against a monotonic clock

/// A timer armed with a start timestamp and polled for expiry.
///
/// The duration is supplied at poll time so the same timer can serve windows
/// whose length depends on current state (e.g. the equipped weapon).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    started_at: Option<u64>,
}

impl Cooldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now` as the start of the window (re-arming restarts it)
    pub fn arm(&mut self, now: u64) {
        self.started_at = Some(now);
    }

    /// Milliseconds since the timer was armed
    pub fn elapsed(&self, now: u64) -> Option<u64> {
        self.started_at.map(|start| now.saturating_sub(start))
    }

    /// True once at least `duration_ms` has passed since arming.
    /// An unarmed timer never expires.
    pub fn expired(&self, now: u64, duration_ms: u64) -> bool {
        self.elapsed(now).is_some_and(|elapsed| elapsed >= duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_never_expires() {
        let timer = Cooldown::new();
        assert_eq!(timer.elapsed(10_000), None);
        assert!(!timer.expired(10_000, 0));
    }

    #[test]
    fn test_expires_exactly_at_duration() {
        let mut timer = Cooldown::new();
        timer.arm(1000);
        assert!(!timer.expired(1399, 400));
        assert!(timer.expired(1400, 400));
        assert!(timer.expired(5000, 400));
    }

    #[test]
    fn test_rearm_restarts_window() {
        let mut timer = Cooldown::new();
        timer.arm(0);
        timer.arm(500);
        assert!(!timer.expired(600, 200));
        assert!(timer.expired(700, 200));
        assert_eq!(timer.elapsed(600), Some(100));
    }

    #[test]
    fn test_clock_before_start_saturates() {
        let mut timer = Cooldown::new();
        timer.arm(100);
        assert_eq!(timer.elapsed(50), Some(0));
        assert!(timer.expired(50, 0));
    }
}
