//! Non-blocking heartbeat timer for the status LED.

/// Tracks elapsed time against a fixed period without blocking.
///
/// Fed with a monotonic microsecond timestamp every loop iteration;
/// [`tick`](Heartbeat::tick) reports when the period has elapsed so the
/// caller can toggle its indicator.
pub struct Heartbeat {
    period_us: u64,
    last_us: u64,
}

impl Heartbeat {
    /// Create a heartbeat with the given period in microseconds.
    #[must_use]
    pub const fn new(period_us: u64) -> Self {
        Self {
            period_us,
            last_us: 0,
        }
    }

    /// Advance to `now_us`. Returns true when a full period has elapsed
    /// since the last firing, resetting the reference point.
    pub fn tick(&mut self, now_us: u64) -> bool {
        if now_us.wrapping_sub(self.last_us) >= self.period_us {
            self.last_us = now_us;
            true
        } else {
            false
        }
    }
}
