use crate::coords::{SurfaceSize, ViewportRect};

use super::{DrawingSurface, RenderingContext};

/// Reconciles the drawing surface with the host window size.
///
/// Owns both the surface and its rendering context; a monitor cannot exist without a
/// context, so hosts that fail to acquire one never build it.
pub struct ViewportMonitor<S, G> {
    surface: S,
    context: G,

    /// Last size applied (or confirmed) by `reconcile`.
    size: Option<SurfaceSize>,
}

impl<S, G> ViewportMonitor<S, G>
where
    S: DrawingSurface,
    G: RenderingContext,
{
    pub fn new(surface: S, context: G) -> Self {
        Self {
            surface,
            context,
            size: None,
        }
    }

    /// Brings the surface in line with `window`.
    ///
    /// On mismatch the backing size, the presented size, and the context viewport
    /// `(0, 0, w, h)` are all updated. Returns whether anything was mutated.
    pub fn reconcile(&mut self, window: SurfaceSize) -> bool {
        let current = self.surface.backing_size();
        self.size = Some(window);

        if current == window {
            return false;
        }

        self.surface.set_backing_size(window);
        self.surface.set_presented_size(window);
        self.context.set_viewport(ViewportRect::covering(window));

        log::debug!("surface resized {current} -> {window}");
        true
    }

    /// Last reconciled size, `None` before the first reconciliation.
    pub fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn context(&self) -> &G {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut G {
        &mut self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;

    fn monitor(initial: SurfaceSize) -> (ViewportMonitor<HeadlessSurface, HeadlessSurface>, HeadlessSurface) {
        let surface = HeadlessSurface::new(initial);
        (ViewportMonitor::new(surface.clone(), surface.clone()), surface)
    }

    #[test]
    fn matching_size_is_untouched() {
        let (mut m, surface) = monitor(SurfaceSize::new(800, 600));
        assert!(!m.reconcile(SurfaceSize::new(800, 600)));

        let rec = surface.record();
        assert_eq!(rec.backing_writes, 0);
        assert_eq!(rec.presented_writes, 0);
        assert_eq!(rec.viewport_writes, 0);
        assert_eq!(m.size(), Some(SurfaceSize::new(800, 600)));
    }

    #[test]
    fn mismatch_resizes_surface_and_viewport() {
        let (mut m, surface) = monitor(SurfaceSize::new(800, 600));
        assert!(m.reconcile(SurfaceSize::new(1024, 768)));

        let rec = surface.record();
        assert_eq!(rec.backing, SurfaceSize::new(1024, 768));
        assert_eq!(rec.presented, SurfaceSize::new(1024, 768));
        assert_eq!(rec.viewport, ViewportRect::new(0, 0, 1024, 768));
    }

    #[test]
    fn width_only_change_is_detected() {
        let (mut m, _surface) = monitor(SurfaceSize::new(800, 600));
        assert!(m.reconcile(SurfaceSize::new(801, 600)));
    }

    #[test]
    fn second_reconcile_is_a_no_op() {
        let (mut m, surface) = monitor(SurfaceSize::new(300, 150));
        assert!(m.reconcile(SurfaceSize::new(640, 480)));
        assert!(!m.reconcile(SurfaceSize::new(640, 480)));

        let rec = surface.record();
        assert_eq!(rec.backing_writes, 1);
        assert_eq!(rec.presented_writes, 1);
        assert_eq!(rec.viewport_writes, 1);
    }
}
