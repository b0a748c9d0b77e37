use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::window::Window;

use crate::coords::{SurfaceSize, ViewportRect};

use super::msaa::{self, MsaaTarget};
use super::surface::{self, SurfaceErrorAction, Swapchain};
use super::{GpuFrame, GpuInit};

/// wgpu objects bound to one window: the native drawing surface and its context.
///
/// - creates and stores Adapter/Device/Queue
/// - creates and configures the Surface (swapchain)
/// - tracks the viewport clients should render into
/// - acquires frames and provides an encoder + view for rendering
pub struct Gpu {
    surface: wgpu::Surface<'static>,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: SurfaceSize,

    viewport: ViewportRect,

    /// Effective MSAA sample count (1 when antialiasing is off or unsupported).
    sample_count: u32,
    msaa: Option<MsaaTarget>,
}

impl Gpu {
    /// Creates a GPU context bound to `window`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(window: Arc<Window>, init: GpuInit) -> Result<Self> {
        let inner = window.inner_size();
        let size = SurfaceSize::new(inner.width, inner.height);
        anyhow::ensure!(!size.is_empty(), "window has zero size");

        let requested_samples = init.sample_count();
        let GpuInit {
            prefer_srgb,
            present_mode,
            alpha_mode,
            required_features,
            required_limits,
            desired_maximum_frame_latency,
            ..
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pacer device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, prefer_srgb)
            .context("no supported surface formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode: surface::choose_alpha_mode(&caps, alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);

        let sample_count = msaa::resolve_sample_count(
            requested_samples,
            adapter.get_texture_format_features(format).flags,
        );
        let msaa = MsaaTarget::create(&device, size, format, sample_count);

        log::info!(
            "gpu ready: adapter '{}', format {:?}, {size}, {sample_count}x samples",
            adapter.get_info().name,
            format
        );

        Ok(Self {
            surface,
            adapter,
            device,
            queue,
            config,
            size,
            viewport: ViewportRect::covering(size),
            sample_count,
            msaa,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current drawable size (physical pixels).
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Viewport clients should set on their render passes.
    pub fn viewport(&self) -> ViewportRect {
        self.viewport
    }

    /// Sample count of the frame's color target: the `antialias` request, limited to
    /// what the adapter supports for the surface format.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the swapchain for `new_size`.
    pub fn resize(&mut self, new_size: SurfaceSize) {
        self.size = new_size;
        self.swapchain().resize(new_size);

        if new_size.is_empty() || self.msaa.as_ref().is_some_and(|t| t.size() == new_size) {
            return;
        }
        self.msaa = MsaaTarget::create(
            &self.device,
            new_size,
            self.config.format,
            self.sample_count,
        );
    }

    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = viewport;
    }

    /// Acquires the next surface texture and creates an encoder.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("pacer frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
            msaa_view: self.msaa.as_ref().map(MsaaTarget::view),
        })
    }

    /// Submits the recorded commands and presents the frame.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
            msaa_view,
        } = frame;

        self.queue.submit(std::iter::once(encoder.finish()));
        drop(msaa_view);
        drop(view);
        surface_texture.present();
    }

    /// Recovers from a failed `begin_frame` where possible and says what to do with
    /// the current frame.
    pub fn handle_surface_error(&mut self, err: &SurfaceError) -> SurfaceErrorAction {
        let size = self.size;
        self.swapchain().recover(size, err)
    }

    fn swapchain(&mut self) -> Swapchain<'_> {
        Swapchain {
            surface: &self.surface,
            device: &self.device,
            config: &mut self.config,
        }
    }
}
