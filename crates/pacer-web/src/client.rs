use anyhow::{Context, Result, anyhow};
use js_sys::{Array, Function, Promise, Reflect};
use pacer_engine::core::{ClientFactory, RenderClient};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::js_error;

/// JS engine object driven through its `update` and `render` methods.
///
/// Any object with those two methods works, including a `#[wasm_bindgen]` class
/// exported by another Rust module. Exceptions surface as frame errors.
pub struct JsRenderClient {
    target: JsValue,
    update: Function,
    render: Function,
}

impl JsRenderClient {
    pub fn new(target: JsValue) -> Result<Self> {
        let update = method(&target, "update")?;
        let render = method(&target, "render")?;
        Ok(Self {
            target,
            update,
            render,
        })
    }

    pub fn target(&self) -> &JsValue {
        &self.target
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| anyhow!("engine client has no `{name}` method"))
}

impl RenderClient for JsRenderClient {
    fn update(&mut self, elapsed_ms: f64, width: u32, height: u32) -> Result<()> {
        self.update
            .call3(
                &self.target,
                &JsValue::from_f64(elapsed_ms),
                &JsValue::from(width),
                &JsValue::from(height),
            )
            .map_err(js_error)?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.render.call0(&self.target).map_err(js_error)?;
        Ok(())
    }
}

/// Constructor exported by a loaded engine module.
pub struct JsClientFactory {
    export: String,
    constructor: Function,
}

impl ClientFactory for JsClientFactory {
    type Client = JsRenderClient;

    /// Calls `new Export()` with no arguments.
    fn construct(self) -> Result<JsRenderClient> {
        let instance = Reflect::construct(&self.constructor, &Array::new())
            .map_err(js_error)
            .with_context(|| format!("`new {}()` threw", self.export))?;
        JsRenderClient::new(instance)
    }
}

/// Awaits an engine module (e.g. the promise from `import("./pkg/index")`) and looks up
/// the client class exported as `export`.
pub async fn load_module(module: Promise, export: String) -> Result<JsClientFactory> {
    let module = JsFuture::from(module)
        .await
        .map_err(js_error)
        .context("engine module failed to load")?;

    let constructor = Reflect::get(&module, &JsValue::from_str(&export))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| anyhow!("module export `{export}` is not a constructor"))?;

    Ok(JsClientFactory {
        export,
        constructor,
    })
}
