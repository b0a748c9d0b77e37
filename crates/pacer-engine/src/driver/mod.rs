//! Frame driver.
//!
//! Composes throttle, viewport monitor, elapsed clock, and client bridge into the
//! per-tick callback a host invokes from its frame-scheduling primitive.

mod frame_driver;
mod state;
mod stop;

pub use frame_driver::{FrameDriver, FrameInfo, TickOutcome};
pub use state::DriverState;
pub use stop::StopHandle;
