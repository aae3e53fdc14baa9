//! # Client configuration
//!
//! The host page that loads the WASM bundle knows who is signed in; it
//! exposes that through a few globals the client reads at startup:
//!
//! ```html
//! <script>
//!   window.MY_ID = "spotify-user-id";
//!   window.MY_NAME = "Display Name";   // optional
//!   window.API_BASE = "https://…";     // optional, defaults to the page origin
//! </script>
//! ```
//!
//! Native builds (tests, tooling) read `MY_ID`, `MY_NAME` and `API_BASE`
//! from the environment instead, with `.env` support via `dotenvy`.

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Where the backend lives and who the current user is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin prefixed to every `/api/...` path, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Current user's id; `None` means nobody is signed in.
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub display_name: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8888".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

impl ApiConfig {
    /// Config for an anonymous session against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: None,
            display_name: None,
        }
    }

    /// Builder method to set the signed-in user.
    pub fn with_user(mut self, id: impl Into<UserId>) -> Self {
        let id = id.into();
        self.user_id = (!id.is_empty()).then_some(id);
        self
    }

    /// Builder method to set the signed-in user's display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.display_name = (!name.is_empty()).then_some(name);
        self
    }

    /// Absolute URL for an API path such as `/api/shared`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the config from the host page globals.
    #[cfg(target_arch = "wasm32")]
    pub fn from_page() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let base = read_global(&window, "API_BASE")
            .or_else(|| window.location().origin().ok())
            .unwrap_or_else(default_base_url);

        let mut config = Self::new(base);
        if let Some(id) = read_global(&window, "MY_ID") {
            config = config.with_user(id);
        }
        if let Some(name) = read_global(&window, "MY_NAME") {
            config = config.with_display_name(name);
        }
        tracing::debug!(base = %config.base_url, signed_in = config.user_id.is_some(), "loaded page config");
        config
    }

    /// Read the config from the environment (and `.env`, if present).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_page() -> Self {
        dotenvy::dotenv().ok();

        let base = std::env::var("API_BASE").unwrap_or_else(|_| default_base_url());
        let mut config = Self::new(base);
        if let Ok(id) = std::env::var("MY_ID") {
            config = config.with_user(id);
        }
        if let Ok(name) = std::env::var("MY_NAME") {
            config = config.with_display_name(name);
        }
        config
    }
}

/// Reads `window[name]` as a string. Numbers are accepted, since templates
/// often render ids unquoted.
#[cfg(target_arch = "wasm32")]
fn read_global(window: &web_sys::Window, name: &str) -> Option<String> {
    let value = js_sys::Reflect::get(window, &wasm_bindgen::JsValue::from_str(name)).ok()?;
    if let Some(s) = value.as_string() {
        return (!s.is_empty()).then_some(s);
    }
    let n = value.as_f64()?;
    if n.fract() == 0.0 {
        Some(format!("{}", n as i64))
    } else {
        Some(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8888");
        assert!(config.user_id.is_none());
        assert_eq!(config.url("/api/shared"), "http://localhost:8888/api/shared");
    }

    #[test]
    fn test_builders_trim_and_ignore_empty() {
        let config = ApiConfig::new("https://mixtape.example/")
            .with_user("abc")
            .with_display_name("");
        assert_eq!(config.url("/api/users"), "https://mixtape.example/api/users");
        assert_eq!(config.user_id, Some(UserId::from("abc")));
        assert_eq!(config.display_name, None);

        let anonymous = ApiConfig::default().with_user("");
        assert!(anonymous.user_id.is_none());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"user_id": 1}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:8888");
        assert_eq!(config.user_id, Some(UserId::from("1")));
    }
}
