use dioxus::prelude::*;

/// Placeholder line shown in place of an empty or failed list.
#[component]
pub fn EmptyState(#[props(into)] message: String) -> Element {
    rsx! {
        p { class: "empty-state", "{message}" }
    }
}
