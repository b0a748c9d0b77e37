use std::future::ready;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::bootstrap::Bootstrap;
use crate::config::DriverConfig;
use crate::core::{LogNotifier, RenderClient};
use crate::device::{Gpu, GpuInit, GpuSurface};
use crate::driver::{FrameDriver, TickOutcome};

use super::WindowHost;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub driver: DriverConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "pacer".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            driver: DriverConfig::default(),
        }
    }
}

/// Frame driver as wired by the native runtime.
pub type NativeDriver<C> = FrameDriver<WindowHost, C, GpuSurface, GpuSurface>;

/// Entry point for the native runtime.
pub struct Runtime;

impl Runtime {
    /// Opens a window and runs the frame loop until the window closes or the driver
    /// stops.
    ///
    /// `factory` builds the render client once the GPU surface exists. A GPU that cannot
    /// be initialized is fatal and returned as an error.
    pub fn run<F, C>(config: RuntimeConfig, gpu_init: GpuInit, factory: F) -> Result<()>
    where
        F: FnOnce(GpuSurface) -> Result<C> + 'static,
        C: RenderClient + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let gpu_init = gpu_init.with_context(config.driver.context);
        let mut state = AppState::new(config, gpu_init, factory);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct AppState<F, C>
where
    C: RenderClient,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    factory: Option<F>,

    window_id: Option<WindowId>,
    driver: Option<NativeDriver<C>>,
    failure: Option<anyhow::Error>,
}

impl<F, C> AppState<F, C>
where
    F: FnOnce(GpuSurface) -> Result<C> + 'static,
    C: RenderClient + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, factory: F) -> Self {
        Self {
            config,
            gpu_init,
            factory: Some(factory),
            window_id: None,
            driver: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    /// Window + GPU + bootstrap. Returns a `Running` driver.
    fn launch(&mut self, event_loop: &ActiveEventLoop) -> Result<NativeDriver<C>> {
        let factory = self
            .factory
            .take()
            .ok_or_else(|| anyhow!("runtime already launched"))?;

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        self.window_id = Some(window.id());

        let context = match pollster::block_on(Gpu::new(window.clone(), self.gpu_init.clone())) {
            Ok(gpu) => {
                let surface = GpuSurface::new(gpu);
                Some((surface.clone(), surface))
            }
            Err(e) => {
                log::error!("GPU initialization failed: {e:#}");
                None
            }
        };

        let client_surface = context.as_ref().map(|(surface, _)| surface.clone());
        let module = ready(Ok(move || -> Result<C> {
            let surface = client_surface.ok_or_else(|| anyhow!("no GPU surface"))?;
            factory(surface)
        }));

        let mut bootstrap = Bootstrap::new(self.config.driver.clone(), LogNotifier)
            .context_notice("Failed to initialize the GPU surface!");

        let mut driver = pollster::block_on(bootstrap.launch(
            WindowHost::new(window),
            context,
            module,
        ))?;

        driver.start()?;
        Ok(driver)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };

        match driver.tick() {
            Ok(TickOutcome::Stopped) => event_loop.exit(),
            Ok(_) => {}
            Err(e) => {
                log::error!("frame failed: {:#}", anyhow::Error::new(e));
                if driver.state().is_terminal() {
                    event_loop.exit();
                }
            }
        }
    }
}

impl<F, C> ApplicationHandler for AppState<F, C>
where
    F: FnOnce(GpuSurface) -> Result<C> + 'static,
    C: RenderClient + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.driver.is_some() || self.failure.is_some() {
            return;
        }

        match self.launch(event_loop) {
            Ok(driver) => self.driver = Some(driver),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window_id != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                if let Some(driver) = self.driver.as_mut() {
                    driver.stop();
                }
                event_loop.exit();
            }

            // Size changes are picked up by the driver on its next produced frame.
            WindowEvent::Resized(size) => {
                log::trace!("window resized to {}x{}", size.width, size.height);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
