use std::fmt;
use std::ops::Add;

/// Host time in milliseconds.
///
/// The origin is host-defined (`performance.now()` on the web, a process-local
/// `Instant` natively). Only differences between timestamps from the same source
/// are meaningful.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Timestamp(f64);

impl Timestamp {
    #[inline]
    pub const fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(self) -> f64 {
        self.0
    }

    /// Milliseconds since `earlier`, clamped at zero.
    #[inline]
    pub fn saturating_since(self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl Add<f64> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, ms: f64) -> Timestamp {
        Timestamp(self.0 + ms)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}ms", self.0)
    }
}
