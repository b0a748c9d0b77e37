use std::fmt;

/// Driver lifecycle.
///
/// `Uninitialized -> Ready -> Running -> Stopped`, or `Uninitialized -> Failed` when the
/// rendering context cannot be acquired. `Failed` and `Stopped` are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DriverState {
    Uninitialized,
    Ready,
    Running,
    Stopped,
    Failed,
}

impl DriverState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, DriverState::Stopped | DriverState::Failed)
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DriverState::Uninitialized => "uninitialized",
            DriverState::Ready => "ready",
            DriverState::Running => "running",
            DriverState::Stopped => "stopped",
            DriverState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_stopped_and_failed_are_terminal() {
        assert!(DriverState::Stopped.is_terminal());
        assert!(DriverState::Failed.is_terminal());
        assert!(!DriverState::Uninitialized.is_terminal());
        assert!(!DriverState::Ready.is_terminal());
        assert!(!DriverState::Running.is_terminal());
    }
}
