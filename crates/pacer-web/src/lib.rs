//! Browser host for the pacer frame driver.
//!
//! Wires a `FrameDriver` to a page: the canvas is the drawing surface, its WebGL
//! context supplies the viewport, `requestAnimationFrame` schedules ticks, and the
//! rendering engine is either a Rust `RenderClient` or a JS object exposing
//! `update(elapsed, width, height)` and `render()`.
//!
//! From JS:
//!
//! ```js
//! import init, { launch } from "./pkg/pacer_web";
//!
//! await init();
//! const handle = await launch("rustCanvas", import("./pkg/index"), "RustClient");
//! // later
//! handle.stop();
//! ```

mod canvas;
mod client;
mod config;
mod host;
mod notice;
mod run;

pub use canvas::{CanvasSurface, WebGlContext, acquire_context};
pub use client::{JsClientFactory, JsRenderClient, load_module};
pub use config::WebConfig;
pub use host::WebHost;
pub use notice::{AlertNotifier, WEBGL_NOTICE};
pub use run::{LoopHandle, launch, run};

use wasm_bindgen::{JsCast, JsValue};

/// Module init hook: panic messages and logs go to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use pacer_engine::logging::{LoggingConfig, init_logging};

    console_error_panic_hook::set_once();
    init_logging(LoggingConfig::default());
}

/// Formats a thrown JS value for logs and `anyhow` errors.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}", describe_js(&value))
}
