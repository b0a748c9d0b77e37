use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{SurfaceSize, ViewportRect};
use crate::viewport::{DrawingSurface, RenderingContext};

/// Snapshot of everything a `HeadlessSurface` has been told.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceRecord {
    pub backing: SurfaceSize,
    pub presented: SurfaceSize,
    pub viewport: ViewportRect,
    pub backing_writes: usize,
    pub presented_writes: usize,
    pub viewport_writes: usize,
}

/// In-memory drawing surface that doubles as its own rendering context.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    record: Rc<RefCell<SurfaceRecord>>,
}

impl HeadlessSurface {
    pub fn new(initial: SurfaceSize) -> Self {
        Self {
            record: Rc::new(RefCell::new(SurfaceRecord {
                backing: initial,
                presented: initial,
                viewport: ViewportRect::covering(initial),
                ..SurfaceRecord::default()
            })),
        }
    }

    pub fn record(&self) -> SurfaceRecord {
        self.record.borrow().clone()
    }
}

impl DrawingSurface for HeadlessSurface {
    fn backing_size(&self) -> SurfaceSize {
        self.record.borrow().backing
    }

    fn set_backing_size(&mut self, size: SurfaceSize) {
        let mut rec = self.record.borrow_mut();
        rec.backing = size;
        rec.backing_writes += 1;
    }

    fn set_presented_size(&mut self, size: SurfaceSize) {
        let mut rec = self.record.borrow_mut();
        rec.presented = size;
        rec.presented_writes += 1;
    }
}

impl RenderingContext for HeadlessSurface {
    fn set_viewport(&mut self, viewport: ViewportRect) {
        let mut rec = self.record.borrow_mut();
        rec.viewport = viewport;
        rec.viewport_writes += 1;
    }
}
