//! Engine error types.
//!
//! Typed errors cover the driver's own failure modes. Failures coming out of the
//! engine client or the host are opaque and carried as `anyhow::Error`.

use std::fmt;

use crate::driver::DriverState;

/// Invalid configuration values.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("target frame rate must be finite and positive, got {0}")]
    InvalidFrameRate(f64),

    #[error("target frame interval must be finite and positive, got {0}ms")]
    InvalidInterval(f64),
}

/// Failures while bringing a driver from `Uninitialized` to `Ready`.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The drawing context could not be acquired. Fatal, not retried.
    #[error("rendering context is unavailable")]
    ContextUnavailable,

    /// The engine module failed to load.
    #[error("failed to load rendering engine module")]
    ModuleLoad(#[source] anyhow::Error),

    /// The module loaded but its client constructor failed.
    #[error("failed to construct rendering engine client")]
    ClientConstruction(#[source] anyhow::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("bootstrap was already launched")]
    AlreadyLaunched,
}

/// Which half of the per-frame contract failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStage {
    Update,
    Render,
}

impl fmt::Display for FrameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameStage::Update => f.write_str("update"),
            FrameStage::Render => f.write_str("render"),
        }
    }
}

/// Failures raised while the driver runs.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The host refused to schedule the next tick.
    #[error("failed to request next tick")]
    Schedule(#[source] anyhow::Error),

    /// The engine client failed during a produced frame.
    #[error("render client failed during {stage}")]
    Client {
        stage: FrameStage,
        #[source]
        source: anyhow::Error,
    },

    #[error("driver is {actual}, expected {expected}")]
    InvalidState {
        expected: DriverState,
        actual: DriverState,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_reads_as_lifecycle_names() {
        let err = DriverError::InvalidState {
            expected: DriverState::Ready,
            actual: DriverState::Running,
        };
        assert_eq!(err.to_string(), "driver is running, expected ready");
    }

    #[test]
    fn client_error_names_stage() {
        let err = DriverError::Client {
            stage: FrameStage::Update,
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(err.to_string(), "render client failed during update");
    }
}
