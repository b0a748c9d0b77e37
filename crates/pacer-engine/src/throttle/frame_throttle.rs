use crate::error::ConfigError;
use crate::time::Timestamp;

/// Immutable throttle parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThrottleConfig {
    target_interval_ms: f64,
}

impl ThrottleConfig {
    /// Builds a config from a target frame rate (60 Hz -> ~16.67 ms).
    pub fn from_fps(fps: f64) -> Result<Self, ConfigError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(ConfigError::InvalidFrameRate(fps));
        }
        Ok(Self {
            target_interval_ms: 1000.0 / fps,
        })
    }

    /// Builds a config from an explicit interval in milliseconds.
    pub fn from_interval_ms(ms: f64) -> Result<Self, ConfigError> {
        if !ms.is_finite() || ms <= 0.0 {
            return Err(ConfigError::InvalidInterval(ms));
        }
        Ok(Self {
            target_interval_ms: ms,
        })
    }

    pub fn target_interval_ms(&self) -> f64 {
        self.target_interval_ms
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            target_interval_ms: 1000.0 / 60.0,
        }
    }
}

/// Decides whether a scheduling tick should produce a frame.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    config: ThrottleConfig,
}

impl FrameThrottle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self { config }
    }

    /// True when nothing was produced yet, or when `now` is at least one interval past
    /// `last_produced`.
    #[inline]
    pub fn should_produce(&self, now: Timestamp, last_produced: Option<Timestamp>) -> bool {
        match last_produced {
            None => true,
            Some(last) => now >= last + self.config.target_interval_ms,
        }
    }
}
