use anyhow::Result;

use crate::coords::SurfaceSize;
use crate::time::Timestamp;

/// Host capabilities the frame driver needs every tick.
pub trait Host {
    /// Current host time.
    fn now(&self) -> Timestamp;

    /// Current window size the drawing surface should match.
    fn window_size(&self) -> SurfaceSize;

    /// Asks the host to invoke the driver's tick again before the next repaint.
    ///
    /// Hosts give no periodicity guarantee.
    fn request_tick(&mut self) -> Result<()>;
}

/// Sink for user-visible notices (fatal initialization failures).
pub trait UserNotifier {
    fn notify(&mut self, message: &str);
}

/// Notifier for hosts without a user-facing dialog: the notice goes to the error log.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogNotifier;

impl UserNotifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        log::error!("{message}");
    }
}
