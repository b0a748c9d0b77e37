use web_time::Instant;

use super::Timestamp;

/// Source of host timestamps.
pub trait TimeSource {
    fn now(&self) -> Timestamp;
}

/// Monotonic time source backed by `web_time::Instant`.
///
/// Timestamps are milliseconds since the clock was created. Works on native targets
/// and on `wasm32` (where it reads `performance.now()`).
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now(&self) -> Timestamp {
        let elapsed = Instant::now().saturating_duration_since(self.origin);
        Timestamp::from_millis(elapsed.as_secs_f64() * 1000.0)
    }
}
