use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaInbox, FaMagnifyingGlass, FaPeopleArrowsLeftRight, FaRankingStar};

const TABS_CSS: Asset = asset!("/assets/styling/tabs.css");

/// The four panels of the app. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Feed,
    Search,
    Compare,
    Top,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Feed, Tab::Search, Tab::Compare, Tab::Top];

    /// Value of the `data-tab` attribute on the tab button and its panel.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Feed => "feed",
            Tab::Search => "search",
            Tab::Compare => "compare",
            Tab::Top => "top",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::Search => "Share",
            Tab::Compare => "Compare",
            Tab::Top => "Top Tracks",
        }
    }
}

pub fn use_active_tab() -> Signal<Tab> {
    use_context::<Signal<Tab>>()
}

/// Counter the feed watches; bumping it reloads the feed.
#[derive(Clone, Copy, PartialEq)]
pub struct FeedRefresh(pub Signal<u32>);

impl FeedRefresh {
    pub fn bump(mut self) {
        *self.0.write() += 1;
    }
}

pub fn use_feed_refresh() -> FeedRefresh {
    use_context::<FeedRefresh>()
}

#[component]
pub fn TabBar() -> Element {
    let mut active = use_active_tab();

    rsx! {
        document::Stylesheet { href: TABS_CSS }
        nav {
            class: "tab-bar",
            for tab in Tab::ALL {
                button {
                    key: "{tab.id()}",
                    class: if active() == tab { "tab active" } else { "tab" },
                    "data-tab": tab.id(),
                    onclick: move |_| active.set(tab),
                    {tab_icon(tab)}
                    span { "{tab.label()}" }
                }
            }
        }
    }
}

fn tab_icon(tab: Tab) -> Element {
    match tab {
        Tab::Feed => rsx! { Icon { icon: FaInbox, width: 14, height: 14 } },
        Tab::Search => rsx! { Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } },
        Tab::Compare => rsx! { Icon { icon: FaPeopleArrowsLeftRight, width: 14, height: 14 } },
        Tab::Top => rsx! { Icon { icon: FaRankingStar, width: 14, height: 14 } },
    }
}

/// Panel shown only while `tab` is active. Hidden panels stay mounted so
/// their loaded content survives tab switches.
#[component]
pub fn TabPanel(tab: Tab, children: Element) -> Element {
    let active = use_active_tab();

    rsx! {
        section {
            class: "tab-panel",
            "data-tab": tab.id(),
            hidden: active() != tab,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("settings"), None);
    }

    #[test]
    fn test_feed_is_default() {
        assert_eq!(Tab::default(), Tab::Feed);
    }
}
