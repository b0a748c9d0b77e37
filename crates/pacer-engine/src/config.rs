//! Driver configuration.

use crate::error::ConfigError;
use crate::throttle::ThrottleConfig;

/// Options used when acquiring the rendering context from the drawing surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ContextOptions {
    /// Enables multi-sample smoothing in the rendering context.
    pub antialias: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self { antialias: true }
    }
}

/// Frame driver configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Target frame rate in frames per second.
    ///
    /// Ticks arriving sooner than `1000 / target_fps` ms after the last produced frame
    /// are skipped.
    pub target_fps: f64,

    /// Rendering context acquisition options.
    pub context: ContextOptions,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            context: ContextOptions::default(),
        }
    }
}

impl DriverConfig {
    pub fn target_fps(mut self, fps: f64) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn antialias(mut self, enabled: bool) -> Self {
        self.context.antialias = enabled;
        self
    }

    /// Validates the frame rate and derives the throttle interval.
    pub fn throttle(&self) -> Result<ThrottleConfig, ConfigError> {
        ThrottleConfig::from_fps(self.target_fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sixty_hz_with_antialias() {
        let cfg = DriverConfig::default();
        assert_eq!(cfg.target_fps, 60.0);
        assert!(cfg.context.antialias);
        let throttle = cfg.throttle().unwrap();
        assert!((throttle.target_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn builder_setters() {
        let cfg = DriverConfig::default().target_fps(30.0).antialias(false);
        assert_eq!(cfg.target_fps, 30.0);
        assert!(!cfg.context.antialias);
    }

    #[test]
    fn zero_fps_is_rejected() {
        let cfg = DriverConfig::default().target_fps(0.0);
        assert_eq!(cfg.throttle(), Err(ConfigError::InvalidFrameRate(0.0)));
    }
}
