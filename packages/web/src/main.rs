use dioxus::prelude::*;

use ui::{AppShell, SessionProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "mixtape web client started"));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            AppShell {}
        }
    }
}
