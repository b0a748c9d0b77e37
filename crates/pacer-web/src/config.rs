use pacer_engine::config::DriverConfig;

/// Page wiring for the browser host.
#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    /// `id` of the `<canvas>` element to drive.
    pub canvas_id: String,
    pub driver: DriverConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            canvas_id: "rustCanvas".to_string(),
            driver: DriverConfig::default(),
        }
    }
}

impl WebConfig {
    pub fn canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = id.into();
        self
    }

    pub fn driver(mut self, driver: DriverConfig) -> Self {
        self.driver = driver;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_page_canvas() {
        let cfg = WebConfig::default();
        assert_eq!(cfg.canvas_id, "rustCanvas");
        assert_eq!(cfg.driver.target_fps, 60.0);
        assert!(cfg.driver.context.antialias);
    }

    #[test]
    fn builder_overrides() {
        let cfg = WebConfig::default()
            .canvas_id("stage")
            .driver(DriverConfig::default().target_fps(30.0));
        assert_eq!(cfg.canvas_id, "stage");
        assert_eq!(cfg.driver.target_fps, 30.0);
    }
}
