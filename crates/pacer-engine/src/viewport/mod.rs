//! Viewport synchronization.
//!
//! Keeps the drawing surface and its rendering context sized to the host window.
//! Hosts implement `DrawingSurface` + `RenderingContext`; `ViewportMonitor` decides
//! when to touch them.

mod monitor;
mod surface;

pub use monitor::ViewportMonitor;
pub use surface::{DrawingSurface, RenderingContext};
