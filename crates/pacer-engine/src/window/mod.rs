//! Native window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, builds the `Gpu` for it, and drives a
//! `FrameDriver` from `RedrawRequested` events.

mod host;
mod runtime;

pub use host::WindowHost;
pub use runtime::{NativeDriver, Runtime, RuntimeConfig};
