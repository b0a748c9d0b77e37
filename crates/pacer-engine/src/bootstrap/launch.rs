use std::future::Future;

use crate::config::DriverConfig;
use crate::core::{ClientFactory, Host, UserNotifier};
use crate::driver::{DriverState, FrameDriver};
use crate::error::InitError;
use crate::viewport::{DrawingSurface, RenderingContext, ViewportMonitor};

/// Notice shown to the user when no rendering context could be acquired.
pub const DEFAULT_CONTEXT_NOTICE: &str = "Failed to initialize the rendering context!";

/// One-shot driver bootstrap.
pub struct Bootstrap<N> {
    config: DriverConfig,
    notifier: N,
    context_notice: String,
    state: DriverState,
}

impl<N: UserNotifier> Bootstrap<N> {
    pub fn new(config: DriverConfig, notifier: N) -> Self {
        Self {
            config,
            notifier,
            context_notice: DEFAULT_CONTEXT_NOTICE.to_string(),
            state: DriverState::Uninitialized,
        }
    }

    /// Overrides the notice raised when the context is unavailable.
    pub fn context_notice(mut self, notice: impl Into<String>) -> Self {
        self.context_notice = notice.into();
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// `Uninitialized` until `launch` finishes, then `Ready` or `Failed`.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Builds a `Ready` driver once `module` resolves.
    ///
    /// `context` is the surface + rendering context pair the host tried to acquire
    /// before loading the module; `None` means acquisition failed. That case notifies
    /// the user and never invokes the client constructor. Module load failures are
    /// logged only. Nothing is retried.
    pub async fn launch<H, S, G, M, F>(
        &mut self,
        host: H,
        context: Option<(S, G)>,
        module: M,
    ) -> Result<FrameDriver<H, F::Client, S, G>, InitError>
    where
        H: Host,
        S: DrawingSurface,
        G: RenderingContext,
        M: Future<Output = anyhow::Result<F>>,
        F: ClientFactory,
    {
        if self.state != DriverState::Uninitialized {
            log::warn!("bootstrap launched twice; ignoring");
            return Err(InitError::AlreadyLaunched);
        }

        let result = self.try_launch(host, context, module).await;
        self.state = match &result {
            Ok(_) => DriverState::Ready,
            Err(_) => DriverState::Failed,
        };
        result
    }

    async fn try_launch<H, S, G, M, F>(
        &mut self,
        host: H,
        context: Option<(S, G)>,
        module: M,
    ) -> Result<FrameDriver<H, F::Client, S, G>, InitError>
    where
        H: Host,
        S: DrawingSurface,
        G: RenderingContext,
        M: Future<Output = anyhow::Result<F>>,
        F: ClientFactory,
    {
        let throttle = self.config.throttle()?;

        let factory = module.await.map_err(|e| {
            log::error!("failed to load rendering engine module: {e:#}");
            InitError::ModuleLoad(e)
        })?;

        let Some((surface, gl)) = context else {
            log::error!("rendering context is unavailable");
            self.notifier.notify(&self.context_notice);
            return Err(InitError::ContextUnavailable);
        };

        let client = factory.construct().map_err(|e| {
            log::error!("failed to construct rendering engine client: {e:#}");
            InitError::ClientConstruction(e)
        })?;

        Ok(FrameDriver::new(
            throttle,
            host,
            ViewportMonitor::new(surface, gl),
            client,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::future::ready;
    use std::rc::Rc;

    use anyhow::anyhow;

    use super::*;
    use crate::coords::SurfaceSize;
    use crate::headless::{HeadlessHost, HeadlessSurface, RecordingClient};

    #[derive(Default)]
    struct Notices(Vec<String>);

    impl UserNotifier for &mut Notices {
        fn notify(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn recording_client() -> anyhow::Result<RecordingClient> {
        Ok(RecordingClient::new())
    }

    fn parts() -> (HeadlessHost, Option<(HeadlessSurface, HeadlessSurface)>) {
        let host = HeadlessHost::new(SurfaceSize::new(800, 600));
        let surface = HeadlessSurface::new(SurfaceSize::new(300, 150));
        (host, Some((surface.clone(), surface)))
    }

    #[test]
    fn successful_launch_yields_ready_driver() {
        let mut notices = Notices::default();
        let mut boot = Bootstrap::new(DriverConfig::default(), &mut notices);
        let (host, context) = parts();

        let driver = pollster::block_on(boot.launch(
            host.clone(),
            context,
            ready(Ok(recording_client)),
        ))
        .unwrap();

        assert_eq!(driver.state(), DriverState::Ready);
        assert_eq!(boot.state(), DriverState::Ready);
        assert_eq!(host.tick_requests(), 0);
        drop(boot);
        assert!(notices.0.is_empty());
    }

    #[test]
    fn missing_context_notifies_and_never_constructs_client() {
        let mut notices = Notices::default();
        let constructed = Rc::new(Cell::new(false));
        let flag = constructed.clone();

        let mut boot = Bootstrap::new(DriverConfig::default(), &mut notices)
            .context_notice("Failed to initialize WebGL!");
        let (host, _) = parts();
        let context: Option<(HeadlessSurface, HeadlessSurface)> = None;

        let result = pollster::block_on(boot.launch(
            host.clone(),
            context,
            ready(Ok(move || -> anyhow::Result<RecordingClient> {
                flag.set(true);
                Ok(RecordingClient::new())
            })),
        ));

        assert!(matches!(result, Err(InitError::ContextUnavailable)));
        assert_eq!(boot.state(), DriverState::Failed);
        assert!(!constructed.get());
        assert_eq!(host.tick_requests(), 0);
        drop(boot);
        assert_eq!(notices.0, vec!["Failed to initialize WebGL!".to_string()]);
    }

    #[test]
    fn module_failure_is_not_shown_to_user() {
        let mut notices = Notices::default();
        let mut boot = Bootstrap::new(DriverConfig::default(), &mut notices);
        let (host, context) = parts();

        let module = ready(Err::<fn() -> anyhow::Result<RecordingClient>, _>(anyhow!(
            "network error"
        )));
        let result = pollster::block_on(boot.launch(host, context, module));

        assert!(matches!(result, Err(InitError::ModuleLoad(_))));
        assert_eq!(boot.state(), DriverState::Failed);
        drop(boot);
        assert!(notices.0.is_empty());
    }

    #[test]
    fn constructor_failure_is_reported() {
        let mut notices = Notices::default();
        let mut boot = Bootstrap::new(DriverConfig::default(), &mut notices);
        let (host, context) = parts();

        let module = ready(Ok(|| -> anyhow::Result<RecordingClient> { Err(anyhow!("boom")) }));
        let result = pollster::block_on(boot.launch(host, context, module));

        assert!(matches!(result, Err(InitError::ClientConstruction(_))));
    }

    #[test]
    fn invalid_frame_rate_fails_before_loading() {
        let mut notices = Notices::default();
        let mut boot = Bootstrap::new(DriverConfig::default().target_fps(0.0), &mut notices);
        let (host, context) = parts();

        let result = pollster::block_on(boot.launch(
            host,
            context,
            ready(Ok(recording_client)),
        ));

        assert!(matches!(result, Err(InitError::Config(_))));
    }

    #[test]
    fn second_launch_is_rejected() {
        let mut boot = Bootstrap::new(DriverConfig::default(), crate::core::LogNotifier);
        let (host, context) = parts();
        pollster::block_on(boot.launch(
            host.clone(),
            context,
            ready(Ok(recording_client)),
        ))
        .unwrap();

        let (_, context) = parts();
        let again = pollster::block_on(boot.launch(
            host,
            context,
            ready(Ok(recording_client)),
        ));
        assert!(matches!(again, Err(InitError::AlreadyLaunched)));
        assert_eq!(boot.state(), DriverState::Ready);
    }
}
