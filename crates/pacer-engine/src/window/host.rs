use std::sync::Arc;

use anyhow::Result;
use winit::window::Window;

use crate::coords::SurfaceSize;
use crate::core::Host;
use crate::time::{MonotonicClock, TimeSource, Timestamp};

/// `Host` backed by a winit window.
///
/// Ticks are redraw requests; the window's inner size (physical pixels) is the size the
/// swapchain tracks.
pub struct WindowHost {
    window: Arc<Window>,
    clock: MonotonicClock,
}

impl WindowHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            clock: MonotonicClock::new(),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Host for WindowHost {
    fn now(&self) -> Timestamp {
        self.clock.now()
    }

    fn window_size(&self) -> SurfaceSize {
        let size = self.window.inner_size();
        SurfaceSize::new(size.width, size.height)
    }

    fn request_tick(&mut self) -> Result<()> {
        self.window.request_redraw();
        Ok(())
    }
}
