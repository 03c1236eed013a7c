//! Leading-edge rate limiting for high-frequency UI events.
//!
//! Scroll and resize handlers share one small gate: the first event passes
//! immediately, later events pass once the configured interval has elapsed
//! since the last passing event. Callers supply the clock sample, which keeps
//! the gate a pure value type and lets tests drive time by hand.

#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval_ms: f64,
    last_pass: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_pass: None,
        }
    }

    /// Whether an event arriving at `now_ms` should be handled.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_pass {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_pass = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last passing event so the next one passes unconditionally.
    pub fn reset(&mut self) {
        self.last_pass = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_passes() {
        let mut gate = Throttle::new(16.0);
        assert!(gate.ready(1_000.0));
    }

    #[test]
    fn events_inside_the_window_are_suppressed() {
        let mut gate = Throttle::new(16.0);
        assert!(gate.ready(1_000.0));
        assert!(!gate.ready(1_004.0));
        assert!(!gate.ready(1_015.9));
    }

    #[test]
    fn events_after_the_window_pass_again() {
        let mut gate = Throttle::new(16.0);
        assert!(gate.ready(1_000.0));
        assert!(!gate.ready(1_010.0));
        assert!(gate.ready(1_016.0));
        assert!(!gate.ready(1_020.0));
    }

    #[test]
    fn reset_reopens_the_gate() {
        let mut gate = Throttle::new(250.0);
        assert!(gate.ready(1_000.0));
        gate.reset();
        assert!(gate.ready(1_001.0));
    }
}
