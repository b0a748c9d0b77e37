//! Logging utilities.
//!
//! Centralizes logger initialization. Code logs through the `log` facade; the backend
//! is `env_logger` on native targets and the browser console on `wasm32`.

mod init;

pub use init::{LoggingConfig, init_logging};
