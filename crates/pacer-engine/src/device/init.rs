use crate::config::ContextOptions;

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is supported everywhere and paces with vsync.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference; falls back to a supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,

    /// Renders frames through a 4x multisampled target resolved into the swapchain
    /// (see `GpuFrame::main_pass`).
    pub antialias: bool,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            antialias: ContextOptions::default().antialias,
        }
    }
}

impl GpuInit {
    /// Applies driver context options on top of the defaults.
    pub fn with_context(mut self, options: ContextOptions) -> Self {
        self.antialias = options.antialias;
        self
    }

    /// MSAA sample count implied by `antialias`.
    pub fn sample_count(&self) -> u32 {
        if self.antialias { 4 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antialias_maps_to_sample_count() {
        let on = GpuInit::default().with_context(ContextOptions { antialias: true });
        let off = GpuInit::default().with_context(ContextOptions { antialias: false });
        assert_eq!(on.sample_count(), 4);
        assert_eq!(off.sample_count(), 1);
    }
}
