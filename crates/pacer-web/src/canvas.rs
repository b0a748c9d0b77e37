use std::fmt;

use pacer_engine::config::ContextOptions;
use pacer_engine::coords::{SurfaceSize, ViewportRect};
use pacer_engine::viewport::{DrawingSurface, RenderingContext};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use crate::describe_js;

/// `<canvas>` element as a drawing surface.
///
/// Backing size is the `width`/`height` attributes; presented size is the CSS box.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn set_style_px(&self, property: &str, px: u32) {
        if let Err(e) = self
            .canvas
            .style()
            .set_property(property, &format!("{px}px"))
        {
            log::warn!("failed to set canvas {property}: {}", describe_js(&e));
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn backing_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_backing_size(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn set_presented_size(&mut self, size: SurfaceSize) {
        self.set_style_px("width", size.width);
        self.set_style_px("height", size.height);
    }
}

/// WebGL context of the driven canvas.
pub struct WebGlContext {
    gl: WebGlRenderingContext,
}

impl WebGlContext {
    pub fn gl(&self) -> &WebGlRenderingContext {
        &self.gl
    }
}

impl RenderingContext for WebGlContext {
    fn set_viewport(&mut self, viewport: ViewportRect) {
        self.gl.viewport(
            viewport.x,
            viewport.y,
            viewport.width as i32,
            viewport.height as i32,
        );
    }
}

/// Why `acquire_context` came back empty.
#[derive(Debug, Clone, PartialEq)]
enum ContextFailure {
    MissingElement,
    NotACanvas,
    NoWebGl,
    WrongContextType,
    Threw(String),
}

impl fmt::Display for ContextFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextFailure::MissingElement => f.write_str("element not found"),
            ContextFailure::NotACanvas => f.write_str("element is not a <canvas>"),
            ContextFailure::NoWebGl => f.write_str("canvas has no webgl context"),
            ContextFailure::WrongContextType => {
                f.write_str("getContext(\"webgl\") did not return a WebGLRenderingContext")
            }
            ContextFailure::Threw(msg) => write!(f, "getContext(\"webgl\") threw: {msg}"),
        }
    }
}

fn unavailable<T>(canvas_id: &str, reason: ContextFailure) -> Option<T> {
    log::error!("canvas '{canvas_id}': {reason}");
    None
}

/// Finds the canvas `canvas_id` and acquires its `webgl` context.
///
/// Every failure (missing element, not a canvas, no WebGL) yields `None`; the reason is
/// logged and the bootstrap turns it into the user notice.
pub fn acquire_context(
    document: &web_sys::Document,
    canvas_id: &str,
    options: ContextOptions,
) -> Option<(CanvasSurface, WebGlContext)> {
    let Some(element) = document.get_element_by_id(canvas_id) else {
        return unavailable(canvas_id, ContextFailure::MissingElement);
    };

    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        return unavailable(canvas_id, ContextFailure::NotACanvas);
    };

    let attrs = js_sys::Object::new();
    if let Err(e) = js_sys::Reflect::set(
        &attrs,
        &JsValue::from_str("antialias"),
        &JsValue::from_bool(options.antialias),
    ) {
        log::warn!("failed to build context options: {}", describe_js(&e));
    }

    let gl = match canvas.get_context_with_context_options("webgl", &attrs) {
        Ok(Some(ctx)) => match ctx.dyn_into::<WebGlRenderingContext>() {
            Ok(gl) => gl,
            Err(_) => return unavailable(canvas_id, ContextFailure::WrongContextType),
        },
        Ok(None) => return unavailable(canvas_id, ContextFailure::NoWebGl),
        Err(e) => return unavailable(canvas_id, ContextFailure::Threw(describe_js(&e))),
    };

    Some((CanvasSurface::new(canvas), WebGlContext { gl }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_has_a_reason() {
        let reasons = [
            ContextFailure::MissingElement,
            ContextFailure::NotACanvas,
            ContextFailure::NoWebGl,
            ContextFailure::WrongContextType,
            ContextFailure::Threw("SecurityError".to_string()),
        ];
        for reason in reasons {
            assert!(!reason.to_string().is_empty(), "{reason:?}");
        }
    }

    #[test]
    fn wrong_context_type_is_named() {
        let msg = ContextFailure::WrongContextType.to_string();
        assert!(msg.contains("WebGLRenderingContext"), "{msg}");
    }

    #[test]
    fn thrown_message_is_kept() {
        let msg = ContextFailure::Threw("SecurityError".to_string()).to_string();
        assert!(msg.ends_with("threw: SecurityError"), "{msg}");
    }

    #[test]
    fn unavailable_yields_none() {
        let got: Option<u8> = unavailable("rustCanvas", ContextFailure::WrongContextType);
        assert!(got.is_none());
    }
}
