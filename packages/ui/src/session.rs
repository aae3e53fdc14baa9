//! Session context and backend handle for the UI.
//!
//! The host page signs the user in; the client only reads who that is (see
//! [`api::ApiConfig`]) and shares it with every view through context.

use api::{ApiConfig, HttpBackend, UserId};
use dioxus::prelude::*;

use crate::activity_log::ActivityLog;

/// Who is using the app.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user_id: Option<UserId>,
    pub display_name: Option<String>,
}

impl SessionState {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            user_id: config.user_id.clone(),
            display_name: config.display_name.clone(),
        }
    }

    pub fn signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Header label: display name, else the raw id.
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.user_id.as_ref().map(UserId::as_str))
    }
}

/// Get the current session.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the backend client shared by all views.
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// Provider component that reads the page config once and exposes the
/// session, the backend client and the activity log to its children.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_hook(ApiConfig::from_page);

    let session = use_signal({
        let config = config.clone();
        move || SessionState::from_config(&config)
    });
    use_context_provider(|| session);
    use_context_provider(|| HttpBackend::new(config.clone()));
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        {children}
    }
}

/// Full-page navigation, used for the server-driven `/login` and `/logout`.
fn navigate(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(%href, "navigation requested outside the browser");
    }
}

/// Shown instead of the tabs when nobody is signed in.
#[component]
pub fn ConnectPrompt() -> Element {
    rsx! {
        div {
            class: "connect-prompt",
            h1 { "Mixtape" }
            p { "Share songs with friends and see how your taste compares." }
            button {
                class: "connect-btn",
                onclick: move |_| navigate("/login"),
                crate::Icon { icon: crate::brand_icons::FaSpotify, width: 18, height: 18 }
                span { "Connect with Spotify" }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.set(SessionState::default());
        navigate("/logout");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
