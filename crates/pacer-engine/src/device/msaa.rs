use crate::coords::SurfaceSize;

/// Sample count the adapter can actually render and resolve for `format`.
///
/// Falls back to single-sampled when `requested` is not supported.
pub(crate) fn resolve_sample_count(
    requested: u32,
    flags: wgpu::TextureFormatFeatureFlags,
) -> u32 {
    if requested <= 1 {
        return 1;
    }
    if flags.sample_count_supported(requested)
        && flags.contains(wgpu::TextureFormatFeatureFlags::MULTISAMPLE_RESOLVE)
    {
        requested
    } else {
        log::warn!("{requested}x MSAA unsupported for the surface format; using 1x");
        1
    }
}

/// Descriptor of the multisampled color target for a `size` surface, or `None` when
/// frames render straight into the swapchain.
pub(crate) fn msaa_descriptor(
    size: SurfaceSize,
    format: wgpu::TextureFormat,
    sample_count: u32,
) -> Option<wgpu::TextureDescriptor<'static>> {
    if sample_count <= 1 || size.is_empty() {
        return None;
    }
    Some(wgpu::TextureDescriptor {
        label: Some("pacer msaa target"),
        size: wgpu::Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    })
}

/// Multisampled color texture matching the swapchain.
pub(crate) struct MsaaTarget {
    texture: wgpu::Texture,
    size: SurfaceSize,
}

impl MsaaTarget {
    pub fn create(
        device: &wgpu::Device,
        size: SurfaceSize,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Option<Self> {
        let desc = msaa_descriptor(size, format, sample_count)?;
        Some(Self {
            texture: device.create_texture(&desc),
            size,
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn view(&self) -> wgpu::TextureView {
        self.texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}
