use pacer_engine::core::UserNotifier;

/// Notice raised when the canvas has no WebGL context.
pub const WEBGL_NOTICE: &str = "Failed to initialize WebGL!";

/// Shows user notices with `window.alert`.
pub struct AlertNotifier {
    window: web_sys::Window,
}

impl AlertNotifier {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl UserNotifier for AlertNotifier {
    fn notify(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {}", crate::describe_js(&e));
        }
    }
}
