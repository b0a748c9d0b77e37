/// Represents a single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next frame, so
/// pass it to `Gpu::submit` within the same `render` call.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,

    /// Multisampled target to draw into when antialiasing is on; resolves into `view`.
    pub msaa_view: Option<wgpu::TextureView>,
}

impl GpuFrame {
    /// Encoder plus the color attachment for this frame's main pass.
    ///
    /// With MSAA the pass draws into the multisampled target and resolves into the
    /// swapchain view; otherwise it draws into the swapchain view directly.
    pub fn main_pass(
        &mut self,
        load: wgpu::LoadOp<wgpu::Color>,
    ) -> (&mut wgpu::CommandEncoder, wgpu::RenderPassColorAttachment<'_>) {
        let (view, resolve_target, store) = match &self.msaa_view {
            Some(msaa) => (msaa, Some(&self.view), wgpu::StoreOp::Discard),
            None => (&self.view, None, wgpu::StoreOp::Store),
        };

        let attachment = wgpu::RenderPassColorAttachment {
            view,
            resolve_target,
            ops: wgpu::Operations { load, store },
            depth_slice: None,
        };
        (&mut self.encoder, attachment)
    }
}
