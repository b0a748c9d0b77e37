use crate::coords::SurfaceSize;
use crate::error::{DriverError, FrameStage};

use super::RenderClient;

/// Issues the per-frame `update` + `render` pair against the owned client.
pub struct RenderClientBridge<C> {
    client: C,
}

impl<C: RenderClient> RenderClientBridge<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Runs one frame. `render` is skipped when `update` fails.
    pub fn frame(&mut self, elapsed_ms: f64, size: SurfaceSize) -> Result<(), DriverError> {
        self.client
            .update(elapsed_ms, size.width, size.height)
            .map_err(|source| DriverError::Client {
                stage: FrameStage::Update,
                source,
            })?;

        self.client.render().map_err(|source| DriverError::Client {
            stage: FrameStage::Render,
            source,
        })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{ClientCall, RecordingClient};

    #[test]
    fn update_precedes_render() {
        let client = RecordingClient::new();
        let mut bridge = RenderClientBridge::new(client.clone());

        bridge.frame(12.5, SurfaceSize::new(640, 480)).unwrap();

        assert_eq!(
            client.calls(),
            vec![
                ClientCall::Update {
                    elapsed_ms: 12.5,
                    width: 640,
                    height: 480,
                },
                ClientCall::Render { backing: None },
            ]
        );
    }

    #[test]
    fn failed_update_skips_render() {
        let client = RecordingClient::new();
        client.fail_next_update();
        let mut bridge = RenderClientBridge::new(client.clone());

        let err = bridge.frame(0.0, SurfaceSize::new(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            DriverError::Client {
                stage: FrameStage::Update,
                ..
            }
        ));
        assert_eq!(client.renders(), 0);
    }

    #[test]
    fn failed_render_is_reported() {
        let client = RecordingClient::new();
        client.fail_next_render();
        let mut bridge = RenderClientBridge::new(client.clone());

        let err = bridge.frame(0.0, SurfaceSize::new(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            DriverError::Client {
                stage: FrameStage::Render,
                ..
            }
        ));
        assert_eq!(client.updates(), 1);
    }
}
