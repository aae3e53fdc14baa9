use dioxus::prelude::*;

use crate::activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
use crate::lyrics::LyricsTicker;
use crate::session::{ConnectPrompt, LogoutButton, use_session};
use crate::tabs::{FeedRefresh, Tab, TabBar, TabPanel};

use super::{CompareView, FeedView, SearchView, TopTracksView};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top-level layout: header, tab bar and the four panels.
///
/// Must be rendered inside [`crate::SessionProvider`]. Signed-out visitors get
/// the connect prompt instead.
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    use_context_provider(|| Signal::new(Tab::default()));
    use_context_provider(|| FeedRefresh(Signal::new(0)));

    let state = session();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        if !state.signed_in() {
            ConnectPrompt {}
        } else {
            div {
                class: "app-shell",
                header {
                    class: "app-header",
                    h1 { class: "app-title", "Mixtape" }
                    LyricsTicker {}
                    div {
                        class: "app-header-actions",
                        if let Some(label) = state.label() {
                            span { class: "app-user", "{label}" }
                        }
                        ActivityLogToggle {}
                        LogoutButton { class: "logout-btn" }
                    }
                }

                TabBar {}

                main {
                    class: "app-main",
                    TabPanel { tab: Tab::Feed, FeedView {} }
                    TabPanel { tab: Tab::Search, SearchView {} }
                    TabPanel { tab: Tab::Compare, CompareView {} }
                    TabPanel { tab: Tab::Top, TopTracksView {} }
                }

                ActivityLogPanel {}
            }
        }
    }
}
