//! Blocking alerts for failed or completed actions.

/// Show a blocking alert. Native builds have no modal, so the message is
/// logged instead.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(%message, "alert");
    }
}
