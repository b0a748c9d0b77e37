use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use pacer_engine::bootstrap::Bootstrap;
use pacer_engine::config::DriverConfig;
use pacer_engine::core::ClientFactory;
use pacer_engine::driver::{DriverState, StopHandle};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::canvas::acquire_context;
use crate::client::load_module;
use crate::config::WebConfig;
use crate::host::{TickSlot, WebHost};
use crate::notice::{AlertNotifier, WEBGL_NOTICE};

/// Handle to a running page loop.
#[wasm_bindgen]
pub struct LoopHandle {
    stop: StopHandle,
    state: Rc<Cell<DriverState>>,
}

#[wasm_bindgen]
impl LoopHandle {
    /// Ends the loop on its next animation frame.
    pub fn stop(&self) {
        self.stop.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.state.get() == DriverState::Running
    }

    /// True once the loop has ended and will not tick again.
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.get().is_terminal()
    }

    /// Lifecycle state name ("running", "stopped", ...).
    pub fn state(&self) -> String {
        self.state.get().to_string()
    }
}

fn to_js(err: impl Into<anyhow::Error>) -> JsValue {
    JsValue::from_str(&format!("{:#}", err.into()))
}

/// Runs the loop on the page with a Rust-side engine module.
///
/// The canvas context is acquired first, then `module` is awaited for the client
/// constructor. The returned promise rejects on any initialization failure; a missing
/// WebGL context also raises an alert.
pub async fn run<M, F>(config: WebConfig, module: M) -> Result<LoopHandle, JsValue>
where
    M: Future<Output = anyhow::Result<F>>,
    F: ClientFactory,
    F::Client: 'static,
{
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let context = acquire_context(&document, &config.canvas_id, config.driver.context);

    let slot: TickSlot = Rc::new(RefCell::new(None));
    let host = WebHost::new(window.clone(), slot.clone());

    let mut bootstrap = Bootstrap::new(config.driver.clone(), AlertNotifier::new(window))
        .context_notice(WEBGL_NOTICE);
    let driver = bootstrap
        .launch(host, context, module)
        .await
        .map_err(to_js)?;

    let stop = driver.stop_handle();
    let state = Rc::new(Cell::new(driver.state()));
    let driver = Rc::new(RefCell::new(driver));

    // The callback and the driver (through its host) reference each other; the pair
    // lives as long as the page.
    {
        let driver = driver.clone();
        let state = state.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut driver = driver.borrow_mut();
            if let Err(e) = driver.tick() {
                log::error!("frame failed: {:#}", anyhow::Error::new(e));
            }
            let now = driver.state();
            if now.is_terminal() && !state.get().is_terminal() {
                log::info!("page loop ended ({now})");
            }
            state.set(now);
        }) as Box<dyn FnMut()>));
    }

    driver.borrow_mut().start().map_err(to_js)?;
    state.set(driver.borrow().state());

    Ok(LoopHandle { stop, state })
}

/// Runs the loop on canvas `canvas_id`, constructing the engine class exported as
/// `export` by the JS module `module` (a promise, as returned by `import()`).
#[wasm_bindgen]
pub async fn launch(
    canvas_id: String,
    module: js_sys::Promise,
    export: String,
    target_fps: Option<f64>,
) -> Result<LoopHandle, JsValue> {
    let mut driver = DriverConfig::default();
    if let Some(fps) = target_fps {
        driver = driver.target_fps(fps);
    }
    let config = WebConfig::default().canvas_id(canvas_id).driver(driver);

    run(config, load_module(module, export)).await
}
