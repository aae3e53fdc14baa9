//! This crate contains all shared UI for the workspace: the session
//! provider, the tab shell and the four panels.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod notify;
pub use notify::alert;

mod session;
pub use session::{ConnectPrompt, LogoutButton, SessionProvider, SessionState, use_backend, use_session};

pub mod tabs;
pub use tabs::{FeedRefresh, Tab, TabBar, TabPanel, use_active_tab, use_feed_refresh};

mod track_card;
pub use track_card::TrackCard;

pub mod reaction;
pub use reaction::{ReactionButtons, ReactionState};

pub mod lyrics;
pub use lyrics::LyricsTicker;

pub mod views;
pub use views::AppShell;
