use dioxus::prelude::*;

use crate::activity_log::{LogEntry, LogLevel, use_activity_log};
use crate::tabs::{Tab, use_active_tab};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    }
}

/// Chip caption for a panel filter, with its failure count when non-zero.
pub fn filter_label(tab: Tab, failures: usize) -> String {
    if failures == 0 {
        tab.label().to_string()
    } else {
        format!("{} ({failures})", tab.label())
    }
}

/// Activity panel. Entries can be narrowed to one tab, and failed ones link
/// back to the tab that raised them.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let filter = log().filter;
    let entries = log().visible_entries();
    let chips: Vec<(Tab, String)> = Tab::ALL
        .into_iter()
        .map(|tab| (tab, filter_label(tab, log().failures_in(tab))))
        .collect();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity" }
                div {
                    class: "activity-log-header-actions",
                    button { onclick: move |_| log.write().clear(), "Clear" }
                    button { onclick: move |_| log.write().visible = false, "Close" }
                }
            }
            div {
                class: "activity-log-filters",
                button {
                    class: if filter.is_none() { "activity-log-filter active" } else { "activity-log-filter" },
                    onclick: move |_| log.write().filter = None,
                    "All"
                }
                for (tab, caption) in chips {
                    button {
                        key: "{tab.id()}",
                        class: if filter == Some(tab) { "activity-log-filter active" } else { "activity-log-filter" },
                        "data-tab": tab.id(),
                        onclick: move |_| log.write().filter = Some(tab),
                        "{caption}"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    p { class: "activity-log-empty", "Nothing yet." }
                }
                for (i, entry) in entries.into_iter().enumerate() {
                    ActivityLogRow { key: "{i}", entry }
                }
            }
        }
    }
}

#[component]
fn ActivityLogRow(entry: LogEntry) -> Element {
    let mut active_tab = use_active_tab();
    let tab = entry.tab;

    rsx! {
        div {
            class: level_class(entry.level),
            span { class: "activity-log-time", "{entry.timestamp}" }
            span { class: "activity-log-tab", "{tab.label()}" }
            span { class: "activity-log-message", "{entry.message}" }
            if entry.level.is_failure() {
                button {
                    class: "activity-log-goto",
                    onclick: move |_| active_tab.set(tab),
                    "Open"
                }
            }
        }
    }
}

/// Header button that shows/hides the activity panel. Shows the number of
/// failures while there are any, otherwise the entry count.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let failures: usize = Tab::ALL.into_iter().map(|tab| log().failures_in(tab)).sum();
    let count = log().entries.len();

    let caption = match (failures, count) {
        (0, 0) => "Log".to_string(),
        (0, n) => n.to_string(),
        (f, _) => format!("{f} failed"),
    };

    rsx! {
        button {
            class: if log().has_errors() { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            "{caption}"
        }
    }
}
