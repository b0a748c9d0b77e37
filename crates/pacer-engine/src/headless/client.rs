use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, bail};

use crate::coords::SurfaceSize;
use crate::core::RenderClient;
use crate::viewport::DrawingSurface;

use super::HeadlessSurface;

/// One call received by a `RecordingClient`.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCall {
    Update {
        elapsed_ms: f64,
        width: u32,
        height: u32,
    },
    /// `backing` is the observed surface size at render time, when a surface is attached.
    Render { backing: Option<SurfaceSize> },
}

#[derive(Debug, Default)]
struct ClientLog {
    calls: Vec<ClientCall>,
    fail_update: bool,
    fail_render: bool,
}

/// Render client that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingClient {
    log: Rc<RefCell<ClientLog>>,
    observed: Option<HeadlessSurface>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the backing size of `surface` on every `render`.
    pub fn observing(surface: HeadlessSurface) -> Self {
        Self {
            log: Rc::default(),
            observed: Some(surface),
        }
    }

    pub fn calls(&self) -> Vec<ClientCall> {
        self.log.borrow().calls.clone()
    }

    pub fn updates(&self) -> usize {
        self.count(|c| matches!(c, ClientCall::Update { .. }))
    }

    pub fn renders(&self) -> usize {
        self.count(|c| matches!(c, ClientCall::Render { .. }))
    }

    /// The next `update` returns an error.
    pub fn fail_next_update(&self) {
        self.log.borrow_mut().fail_update = true;
    }

    /// The next `render` returns an error.
    pub fn fail_next_render(&self) {
        self.log.borrow_mut().fail_render = true;
    }

    fn count(&self, pred: impl Fn(&ClientCall) -> bool) -> usize {
        self.log.borrow().calls.iter().filter(|c| pred(c)).count()
    }
}

impl RenderClient for RecordingClient {
    fn update(&mut self, elapsed_ms: f64, width: u32, height: u32) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if std::mem::take(&mut log.fail_update) {
            bail!("update rejected");
        }
        log.calls.push(ClientCall::Update {
            elapsed_ms,
            width,
            height,
        });
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let backing = self.observed.as_ref().map(|s| s.backing_size());
        let mut log = self.log.borrow_mut();
        if std::mem::take(&mut log.fail_render) {
            bail!("render rejected");
        }
        log.calls.push(ClientCall::Render { backing });
        Ok(())
    }
}
