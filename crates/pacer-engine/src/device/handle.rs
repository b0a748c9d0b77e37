use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::coords::{SurfaceSize, ViewportRect};
use crate::viewport::{DrawingSurface, RenderingContext};

use super::Gpu;

/// Shared handle to a window's `Gpu`.
///
/// The driver's viewport monitor and the render client each hold a clone; the loop is
/// single-threaded and the driver never overlaps reconciliation with client calls.
#[derive(Clone)]
pub struct GpuSurface {
    gpu: Rc<RefCell<Gpu>>,
}

impl GpuSurface {
    pub fn new(gpu: Gpu) -> Self {
        Self {
            gpu: Rc::new(RefCell::new(gpu)),
        }
    }

    pub fn gpu(&self) -> Ref<'_, Gpu> {
        self.gpu.borrow()
    }

    pub fn gpu_mut(&self) -> RefMut<'_, Gpu> {
        self.gpu.borrow_mut()
    }
}

impl DrawingSurface for GpuSurface {
    fn backing_size(&self) -> SurfaceSize {
        self.gpu.borrow().size()
    }

    fn set_backing_size(&mut self, size: SurfaceSize) {
        self.gpu.borrow_mut().resize(size);
    }

    // Presented size is the window's inner size, which the window system owns.
}

impl RenderingContext for GpuSurface {
    fn set_viewport(&mut self, viewport: ViewportRect) {
        self.gpu.borrow_mut().set_viewport(viewport);
    }
}
