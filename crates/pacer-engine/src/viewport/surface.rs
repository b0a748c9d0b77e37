use crate::coords::{SurfaceSize, ViewportRect};

/// The pixel buffer the engine renders into.
pub trait DrawingSurface {
    /// Current backing size in pixels.
    fn backing_size(&self) -> SurfaceSize;

    /// Resizes the backing pixel buffer.
    fn set_backing_size(&mut self, size: SurfaceSize);

    /// Resizes the presented (layout) box of the surface.
    ///
    /// Hosts where the presented size is owned by the window itself keep the default.
    fn set_presented_size(&mut self, size: SurfaceSize) {
        let _ = size;
    }
}

/// Graphics context bound to a drawing surface.
pub trait RenderingContext {
    fn set_viewport(&mut self, viewport: ViewportRect);
}
