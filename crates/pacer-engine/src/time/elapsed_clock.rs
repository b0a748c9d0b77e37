use super::Timestamp;

/// Elapsed-time clock owned by a frame driver.
///
/// Holds the start time captured once at construction and the timestamp of the most
/// recently produced frame. Nothing here reads a time source: callers pass `now`
/// explicitly so the clock stays deterministic under test.
#[derive(Debug, Clone)]
pub struct ElapsedClock {
    start: Timestamp,
    last_produced: Option<Timestamp>,
    frames: u64,
}

impl ElapsedClock {
    /// Creates a clock whose origin is `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            start,
            last_produced: None,
            frames: 0,
        }
    }

    /// Start time captured at construction.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Milliseconds elapsed since start.
    ///
    /// A host reporting a time before `start` yields zero rather than a negative value.
    pub fn elapsed(&self, now: Timestamp) -> f64 {
        now.saturating_since(self.start)
    }

    /// Timestamp of the last produced frame, `None` before the first one.
    pub fn last_produced(&self) -> Option<Timestamp> {
        self.last_produced
    }

    /// Records that a frame was produced at `now` and returns its index.
    pub fn mark_produced(&mut self, now: Timestamp) -> u64 {
        let index = self.frames;
        self.last_produced = Some(now);
        self.frames = self.frames.wrapping_add(1);
        index
    }

    /// Number of frames produced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: f64) -> Timestamp {
        Timestamp::from_millis(v)
    }

    #[test]
    fn elapsed_is_relative_to_start() {
        let clock = ElapsedClock::new(ms(1_000.0));
        assert_eq!(clock.elapsed(ms(1_000.0)), 0.0);
        assert_eq!(clock.elapsed(ms(1_250.0)), 250.0);
    }

    #[test]
    fn elapsed_before_start_is_zero() {
        let clock = ElapsedClock::new(ms(500.0));
        assert_eq!(clock.elapsed(ms(100.0)), 0.0);
    }

    #[test]
    fn fresh_clock_has_no_produced_frame() {
        let clock = ElapsedClock::new(ms(0.0));
        assert_eq!(clock.last_produced(), None);
        assert_eq!(clock.frames(), 0);
    }

    #[test]
    fn mark_produced_tracks_last_and_index() {
        let mut clock = ElapsedClock::new(ms(0.0));
        assert_eq!(clock.mark_produced(ms(5.0)), 0);
        assert_eq!(clock.mark_produced(ms(21.0)), 1);
        assert_eq!(clock.last_produced(), Some(ms(21.0)));
        assert_eq!(clock.frames(), 2);
        // Marking does not move the origin.
        assert_eq!(clock.start(), ms(0.0));
    }
}
