//! Frame throttling.
//!
//! Skip-if-early policy: a tick produces a frame only when at least one target
//! interval has passed since the last produced frame. Early ticks are dropped without
//! touching any state, and late ticks never trigger catch-up frames.

mod frame_throttle;

pub use frame_throttle::{FrameThrottle, ThrottleConfig};
