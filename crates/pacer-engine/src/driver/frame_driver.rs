use crate::coords::SurfaceSize;
use crate::core::{Host, RenderClient, RenderClientBridge};
use crate::error::DriverError;
use crate::throttle::{FrameThrottle, ThrottleConfig};
use crate::time::ElapsedClock;
use crate::viewport::{DrawingSurface, RenderingContext, ViewportMonitor};

use super::{DriverState, StopHandle};

/// Details of a produced frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInfo {
    /// Zero-based index of the produced frame.
    pub index: u64,

    /// Elapsed time passed to `update`, in milliseconds.
    pub elapsed_ms: f64,

    /// Surface size passed to `update`.
    pub size: SurfaceSize,

    /// Whether the surface was resized for this frame.
    pub resized: bool,
}

/// What a single tick did.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickOutcome {
    /// `update` and `render` ran.
    Produced(FrameInfo),
    /// Too early since the last produced frame; nothing was touched.
    Throttled,
    /// The window has no drawable area; the tick was skipped.
    EmptySurface,
    /// A stop was requested; the next tick was not re-armed.
    Stopped,
    /// The driver is not running; the tick was ignored.
    Inactive,
}

/// Recurring frame callback.
///
/// Owns the host, the viewport monitor (surface + context), and the render client for
/// the whole loop lifetime. A host wires `tick` to its frame-scheduling primitive and
/// calls `start` once.
pub struct FrameDriver<H, C, S, G> {
    host: H,
    throttle: FrameThrottle,
    monitor: ViewportMonitor<S, G>,
    clock: ElapsedClock,
    bridge: RenderClientBridge<C>,
    state: DriverState,
    stop: StopHandle,
}

impl<H, C, S, G> FrameDriver<H, C, S, G>
where
    H: Host,
    C: RenderClient,
    S: DrawingSurface,
    G: RenderingContext,
{
    /// Builds a driver in the `Ready` state. The start time is read from `host` here.
    pub fn new(
        throttle: ThrottleConfig,
        host: H,
        monitor: ViewportMonitor<S, G>,
        client: C,
    ) -> Self {
        let clock = ElapsedClock::new(host.now());
        log::debug!(
            "frame driver ready (interval {:.2}ms, start {})",
            throttle.target_interval_ms(),
            clock.start()
        );

        Self {
            host,
            throttle: FrameThrottle::new(throttle),
            monitor,
            clock,
            bridge: RenderClientBridge::new(client),
            state: DriverState::Ready,
            stop: StopHandle::new(),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Requests the first tick and enters `Running`.
    pub fn start(&mut self) -> Result<(), DriverError> {
        if self.state != DriverState::Ready {
            return Err(DriverError::InvalidState {
                expected: DriverState::Ready,
                actual: self.state,
            });
        }

        self.host.request_tick().map_err(DriverError::Schedule)?;
        self.state = DriverState::Running;
        log::info!("frame driver running");
        Ok(())
    }

    /// Requests a stop. A running loop ends on its next tick; a driver that was never
    /// started goes straight to `Stopped`.
    pub fn stop(&mut self) {
        self.stop.stop();
        if self.state == DriverState::Ready {
            self.state = DriverState::Stopped;
        }
    }

    /// Token that stops this driver from outside the tick callback.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs one scheduling tick.
    ///
    /// Order: stop check, re-arm, throttle, viewport reconciliation, elapsed time,
    /// `update`, `render`. The next tick is requested before any frame work, so a
    /// failing client does not end the loop.
    pub fn tick(&mut self) -> Result<TickOutcome, DriverError> {
        if self.state != DriverState::Running {
            return Ok(TickOutcome::Inactive);
        }

        if self.stop.is_stopped() {
            self.state = DriverState::Stopped;
            log::info!("frame driver stopped after {} frames", self.clock.frames());
            return Ok(TickOutcome::Stopped);
        }

        if let Err(e) = self.host.request_tick() {
            // Without a pending tick nothing will call us again.
            self.state = DriverState::Stopped;
            return Err(DriverError::Schedule(e));
        }

        let now = self.host.now();
        if !self.throttle.should_produce(now, self.clock.last_produced()) {
            log::trace!("tick at {now} throttled");
            return Ok(TickOutcome::Throttled);
        }

        let window = self.host.window_size();
        if window.is_empty() {
            log::trace!("tick at {now} skipped: window is {window}");
            return Ok(TickOutcome::EmptySurface);
        }

        let resized = self.monitor.reconcile(window);
        let index = self.clock.mark_produced(now);
        let elapsed_ms = self.clock.elapsed(now);

        self.bridge.frame(elapsed_ms, window)?;

        Ok(TickOutcome::Produced(FrameInfo {
            index,
            elapsed_ms,
            size: window,
            resized,
        }))
    }

    /// Number of produced frames, including ones whose client calls failed.
    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    pub fn clock(&self) -> &ElapsedClock {
        &self.clock
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn monitor(&self) -> &ViewportMonitor<S, G> {
        &self.monitor
    }

    pub fn client(&self) -> &C {
        self.bridge.client()
    }

    pub fn client_mut(&mut self) -> &mut C {
        self.bridge.client_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameStage;
    use crate::headless::{HeadlessHost, HeadlessSurface, RecordingClient};

    type TestDriver = FrameDriver<HeadlessHost, RecordingClient, HeadlessSurface, HeadlessSurface>;

    struct Rig {
        driver: TestDriver,
        host: HeadlessHost,
        client: RecordingClient,
    }

    fn rig(interval_ms: f64) -> Rig {
        let host = HeadlessHost::new(SurfaceSize::new(800, 600));
        let surface = HeadlessSurface::new(SurfaceSize::new(800, 600));
        let client = RecordingClient::new();
        let driver = FrameDriver::new(
            ThrottleConfig::from_interval_ms(interval_ms).unwrap(),
            host.clone(),
            ViewportMonitor::new(surface.clone(), surface),
            client.clone(),
        );
        Rig {
            driver,
            host,
            client,
        }
    }

    #[test]
    fn new_driver_is_ready_and_idle() {
        let r = rig(16.0);
        assert_eq!(r.driver.state(), DriverState::Ready);
        assert_eq!(r.host.tick_requests(), 0);
        assert!(r.client.calls().is_empty());
    }

    #[test]
    fn ticks_before_start_are_inactive() {
        let mut r = rig(16.0);
        assert_eq!(r.driver.tick().unwrap(), TickOutcome::Inactive);
        assert_eq!(r.host.tick_requests(), 0);
        assert!(r.client.calls().is_empty());
    }

    #[test]
    fn start_requests_first_tick() {
        let mut r = rig(16.0);
        r.driver.start().unwrap();
        assert_eq!(r.driver.state(), DriverState::Running);
        assert_eq!(r.host.tick_requests(), 1);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut r = rig(16.0);
        r.driver.start().unwrap();
        let err = r.driver.start().unwrap_err();
        assert!(matches!(
            err,
            DriverError::InvalidState {
                expected: DriverState::Ready,
                actual: DriverState::Running,
            }
        ));
    }

    #[test]
    fn every_running_tick_rearms_even_when_throttled() {
        let mut r = rig(16.0);
        r.driver.start().unwrap();

        r.host.set_now_ms(0.0);
        assert!(matches!(r.driver.tick().unwrap(), TickOutcome::Produced(_)));
        r.host.set_now_ms(1.0);
        assert_eq!(r.driver.tick().unwrap(), TickOutcome::Throttled);
        r.host.set_now_ms(2.0);
        assert_eq!(r.driver.tick().unwrap(), TickOutcome::Throttled);

        // One request from start, one per tick.
        assert_eq!(r.host.tick_requests(), 4);
        assert_eq!(r.driver.frames(), 1);
    }

    #[test]
    fn elapsed_is_measured_from_construction() {
        let host = HeadlessHost::new(SurfaceSize::new(10, 10));
        host.set_now_ms(1_000.0);
        let surface = HeadlessSurface::new(SurfaceSize::new(10, 10));
        let mut driver = FrameDriver::new(
            ThrottleConfig::default(),
            host.clone(),
            ViewportMonitor::new(surface.clone(), surface),
            RecordingClient::new(),
        );
        driver.start().unwrap();

        host.set_now_ms(1_250.0);
        match driver.tick().unwrap() {
            TickOutcome::Produced(info) => assert_eq!(info.elapsed_ms, 250.0),
            other => panic!("expected a frame, got {other:?}"),
        }
    }

    #[test]
    fn stop_handle_ends_loop_without_rearming() {
        let mut r = rig(16.0);
        r.driver.start().unwrap();
        r.driver.tick().unwrap();
        let requests = r.host.tick_requests();

        r.driver.stop_handle().stop();
        r.host.advance_ms(100.0);
        assert_eq!(r.driver.tick().unwrap(), TickOutcome::Stopped);
        assert_eq!(r.driver.state(), DriverState::Stopped);
        assert!(r.driver.state().is_terminal());
        assert_eq!(r.host.tick_requests(), requests);

        // Stray ticks after the stop are inert.
        r.host.advance_ms(100.0);
        assert_eq!(r.driver.tick().unwrap(), TickOutcome::Inactive);
        assert_eq!(r.client.renders(), 1);
    }

    #[test]
    fn stop_before_start_is_terminal() {
        let mut r = rig(16.0);
        r.driver.stop();
        assert_eq!(r.driver.state(), DriverState::Stopped);
        assert!(r.driver.start().is_err());
        assert_eq!(r.host.tick_requests(), 0);
    }

    #[test]
    fn empty_window_skips_frame_and_keeps_slot() {
        let mut r = rig(16.0);
        r.driver.start().unwrap();

        r.host.set_window_size(SurfaceSize::new(0, 600));
        r.host.set_now_ms(0.0);
        assert_eq!(r.driver.tick().unwrap(), TickOutcome::EmptySurface);
        assert!(r.client.calls().is_empty());

        // The throttle slot was not consumed: the very next tick may produce.
        r.host.set_window_size(SurfaceSize::new(800, 600));
        r.host.set_now_ms(1.0);
        assert!(matches!(r.driver.tick().unwrap(), TickOutcome::Produced(_)));
    }

    #[test]
    fn client_failure_keeps_loop_armed() {
        let mut r = rig(16.0);
        r.driver.start().unwrap();
        r.client.fail_next_render();

        let err = r.driver.tick().unwrap_err();
        assert!(matches!(
            err,
            DriverError::Client {
                stage: FrameStage::Render,
                ..
            }
        ));
        assert_eq!(r.driver.state(), DriverState::Running);
        assert_eq!(r.host.tick_requests(), 2);

        r.host.advance_ms(20.0);
        assert!(matches!(r.driver.tick().unwrap(), TickOutcome::Produced(_)));
    }

    #[test]
    fn refused_rearm_stops_driver() {
        let mut r = rig(16.0);
        r.driver.start().unwrap();
        r.host.refuse_ticks(true);

        assert!(matches!(r.driver.tick(), Err(DriverError::Schedule(_))));
        assert_eq!(r.driver.state(), DriverState::Stopped);
        assert!(r.client.calls().is_empty());
    }
}
