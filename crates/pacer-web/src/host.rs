use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use pacer_engine::coords::SurfaceSize;
use pacer_engine::core::Host;
use pacer_engine::time::Timestamp;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::js_error;

/// Slot holding the tick callback handed to `requestAnimationFrame`.
///
/// Filled once by the runner after the driver exists; the host re-arms the same
/// closure every tick.
pub(crate) type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `Host` backed by the browser window.
pub struct WebHost {
    window: web_sys::Window,
    performance: Option<web_sys::Performance>,
    slot: TickSlot,
}

impl WebHost {
    pub(crate) fn new(window: web_sys::Window, slot: TickSlot) -> Self {
        let performance = window.performance();
        if performance.is_none() {
            log::warn!("window.performance unavailable; falling back to Date.now()");
        }
        Self {
            window,
            performance,
            slot,
        }
    }

    fn dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> u32 {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0)
    }
}

impl Host for WebHost {
    fn now(&self) -> Timestamp {
        let ms = match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        };
        Timestamp::from_millis(ms)
    }

    fn window_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            Self::dimension(self.window.inner_width()),
            Self::dimension(self.window.inner_height()),
        )
    }

    fn request_tick(&mut self) -> Result<()> {
        let slot = self.slot.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| anyhow!("tick callback is not installed"))?;

        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(())
    }
}
