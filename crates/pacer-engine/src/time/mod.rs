//! Time subsystem.
//!
//! Provides host-independent frame timing without coupling to the runtime.
//! Intended usage:
//! - one `ElapsedClock` per frame driver, created when the driver is built
//! - hosts stamp each tick with a `Timestamp` from their own time source

mod elapsed_clock;
mod source;
mod timestamp;

pub use elapsed_clock::ElapsedClock;
pub use source::{MonotonicClock, TimeSource};
pub use timestamp::Timestamp;
