//! Windowless host, surface, and client.
//!
//! Everything here records what the driver did to it, behind cheap shared handles:
//! clone a handle, move one copy into the driver, and inspect through the other.
//! Single-threaded by construction (`Rc<RefCell<_>>`), like the loop itself.

mod client;
mod host;
mod surface;

pub use client::{ClientCall, RecordingClient};
pub use host::HeadlessHost;
pub use surface::{HeadlessSurface, SurfaceRecord};
