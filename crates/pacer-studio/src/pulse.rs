use std::f64::consts::TAU;

use anyhow::{Result, bail};
use pacer_engine::core::RenderClient;
use pacer_engine::coords::SurfaceSize;
use pacer_engine::device::{GpuSurface, SurfaceErrorAction};

/// Seconds for one full trip around the color wheel.
const CYCLE_SECS: f64 = 6.0;

/// Demo engine: clears the surface to a color that drifts with elapsed time.
pub struct PulseClient {
    surface: GpuSurface,
    color: wgpu::Color,
    size: SurfaceSize,
}

impl PulseClient {
    pub fn new(surface: GpuSurface) -> Self {
        Self {
            surface,
            color: wgpu::Color::BLACK,
            size: SurfaceSize::default(),
        }
    }
}

impl RenderClient for PulseClient {
    fn update(&mut self, elapsed_ms: f64, width: u32, height: u32) -> Result<()> {
        self.color = pulse_color(elapsed_ms);
        self.size = SurfaceSize::new(width, height);
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let mut gpu = self.surface.gpu_mut();

        let mut frame = match gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => match gpu.handle_surface_error(&err) {
                SurfaceErrorAction::Fatal => bail!("surface can no longer be rendered to: {err}"),
                action => {
                    log::debug!("skipping frame at {}: {action:?}", self.size);
                    return Ok(());
                }
            },
        };

        let vp = gpu.viewport();
        {
            let (encoder, target) = frame.main_pass(wgpu::LoadOp::Clear(self.color));
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pacer pulse"),
                color_attachments: &[Some(target)],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            rpass.set_viewport(
                vp.x as f32,
                vp.y as f32,
                vp.width as f32,
                vp.height as f32,
                0.0,
                1.0,
            );
        }

        gpu.submit(frame);
        Ok(())
    }
}

/// Color for `elapsed_ms`: three phase-shifted sines, kept away from pure black.
pub fn pulse_color(elapsed_ms: f64) -> wgpu::Color {
    let phase = (elapsed_ms / 1000.0 / CYCLE_SECS).fract() * TAU;
    let channel = |offset: f64| 0.15 + 0.35 * (1.0 + (phase + offset).sin());
    wgpu::Color {
        r: channel(0.0),
        g: channel(TAU / 3.0),
        b: channel(2.0 * TAU / 3.0),
        a: 1.0,
    }
}
