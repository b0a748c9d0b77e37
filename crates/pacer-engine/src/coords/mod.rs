//! Size and viewport types shared by the driver, hosts, and clients.
//!
//! Canonical space:
//! - Physical pixels of the drawing surface
//! - Origin top-left

mod viewport;

pub use viewport::{SurfaceSize, ViewportRect};
