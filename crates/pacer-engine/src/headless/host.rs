use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, bail};

use crate::coords::SurfaceSize;
use crate::core::Host;
use crate::time::Timestamp;

#[derive(Debug)]
struct HostState {
    now: Timestamp,
    window: SurfaceSize,
    tick_requests: usize,
    refuse_ticks: bool,
}

/// Host with a manual clock and a settable window size.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    state: Rc<RefCell<HostState>>,
}

impl HeadlessHost {
    pub fn new(window: SurfaceSize) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                now: Timestamp::default(),
                window,
                tick_requests: 0,
                refuse_ticks: false,
            })),
        }
    }

    pub fn set_now(&self, now: Timestamp) {
        self.state.borrow_mut().now = now;
    }

    pub fn set_now_ms(&self, ms: f64) {
        self.set_now(Timestamp::from_millis(ms));
    }

    pub fn advance_ms(&self, ms: f64) {
        let mut state = self.state.borrow_mut();
        state.now = state.now + ms;
    }

    pub fn set_window_size(&self, size: SurfaceSize) {
        self.state.borrow_mut().window = size;
    }

    /// Number of `request_tick` calls accepted so far.
    pub fn tick_requests(&self) -> usize {
        self.state.borrow().tick_requests
    }

    /// Makes subsequent `request_tick` calls fail.
    pub fn refuse_ticks(&self, refuse: bool) {
        self.state.borrow_mut().refuse_ticks = refuse;
    }
}

impl Host for HeadlessHost {
    fn now(&self) -> Timestamp {
        self.state.borrow().now
    }

    fn window_size(&self) -> SurfaceSize {
        self.state.borrow().window
    }

    fn request_tick(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.refuse_ticks {
            bail!("headless host is refusing ticks");
        }
        state.tick_requests += 1;
        Ok(())
    }
}
