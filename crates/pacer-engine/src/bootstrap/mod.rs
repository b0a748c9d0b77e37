//! Driver bootstrap.
//!
//! Takes a driver from `Uninitialized` to `Ready`: wait for the engine module, check
//! that the drawing context was acquired, construct the client, build the driver.
//! Starting the loop is left to the host so it can wire the tick callback first.

mod launch;

pub use launch::{Bootstrap, DEFAULT_CONTEXT_NOTICE};
