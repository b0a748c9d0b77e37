//! Pacer engine crate.
//!
//! Owns the frame driver that paces a rendering engine inside a host: it decides when a
//! frame is produced, what elapsed time and surface size accompany it, and keeps the
//! drawing surface sized to the host window. Hosts plug in through the `core` traits;
//! the native winit/wgpu host lives in `window` + `device`.

pub mod bootstrap;
pub mod config;
pub mod coords;
pub mod core;
pub mod driver;
pub mod error;
#[cfg(any(test, feature = "headless"))]
pub mod headless;
pub mod logging;
pub mod throttle;
pub mod time;
pub mod viewport;

#[cfg(not(target_arch = "wasm32"))]
pub mod device;
#[cfg(not(target_arch = "wasm32"))]
pub mod window;
