//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the frame driver and the two
//! things it talks to: the host (time, window size, next-tick scheduling) and the
//! opaque rendering engine client.

mod bridge;
mod client;
mod host;

pub use bridge::RenderClientBridge;
pub use client::{ClientFactory, RenderClient};
pub use host::{Host, LogNotifier, UserNotifier};
