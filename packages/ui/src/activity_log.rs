use dioxus::prelude::*;

use crate::tabs::Tab;

/// Oldest entries are dropped past this many.
const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn is_failure(self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    /// Panel the entry came from.
    pub tab: Tab,
    pub message: String,
}

/// User-visible record of loads, shares, reactions and failures, tagged
/// with the panel that produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    /// Panel the log view is narrowed to; `None` shows everything.
    pub filter: Option<Tab>,
}

impl ActivityLog {
    pub fn push(&mut self, timestamp: String, level: LogLevel, tab: Tab, message: &str) {
        self.entries.push(LogEntry {
            timestamp,
            level,
            tab,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }

    /// Entries passing the current filter, newest first.
    pub fn visible_entries(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| self.filter.is_none_or(|tab| e.tab == tab))
            .cloned()
            .collect()
    }

    /// Warnings and errors raised by `tab`.
    pub fn failures_in(&self, tab: Tab) -> usize {
        self.entries
            .iter()
            .filter(|e| e.tab == tab && e.level.is_failure())
            .count()
    }

    /// Drop the entries of the filtered panel, or all of them.
    pub fn clear(&mut self) {
        match self.filter {
            Some(tab) => self.entries.retain(|e| e.tab != tab),
            None => self.entries.clear(),
        }
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Append to the activity log and mirror the message to `tracing`.
pub fn log_activity(log: &mut Signal<ActivityLog>, tab: Tab, level: LogLevel, message: &str) {
    let panel = tab.id();
    match level {
        LogLevel::Error => tracing::error!(panel, "{message}"),
        LogLevel::Warning => tracing::warn!(panel, "{message}"),
        LogLevel::Info | LogLevel::Success => tracing::info!(panel, "{message}"),
    }
    log.write().push(current_time(), level, tab, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with(entries: &[(LogLevel, Tab, &str)]) -> ActivityLog {
        let mut log = ActivityLog::default();
        for (level, tab, message) in entries {
            log.push("12:00:00".into(), *level, *tab, message);
        }
        log
    }

    #[test]
    fn test_push_caps_entries() {
        let mut log = ActivityLog::default();
        for i in 0..(MAX_ENTRIES + 5) {
            log.push("12:00:00".into(), LogLevel::Info, Tab::Feed, &format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 5");
    }

    #[test]
    fn test_has_errors() {
        let mut log = log_with(&[(LogLevel::Warning, Tab::Top, "slow")]);
        assert!(!log.has_errors());
        log.push("12:00:01".into(), LogLevel::Error, Tab::Search, "API error 500");
        assert!(log.has_errors());
    }

    #[test]
    fn test_filter_narrows_to_one_panel_newest_first() {
        let mut log = log_with(&[
            (LogLevel::Info, Tab::Feed, "Feed loaded"),
            (LogLevel::Error, Tab::Compare, "Compare failed: API error 404"),
            (LogLevel::Info, Tab::Feed, "Reacted like to share #1"),
        ]);

        assert_eq!(log.visible_entries().len(), 3);

        log.filter = Some(Tab::Feed);
        let messages: Vec<String> = log.visible_entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["Reacted like to share #1", "Feed loaded"]);
    }

    #[test]
    fn test_failures_are_counted_per_panel() {
        let log = log_with(&[
            (LogLevel::Warning, Tab::Top, "Top tracks: API error 401"),
            (LogLevel::Error, Tab::Top, "Top artists: API error 401"),
            (LogLevel::Success, Tab::Search, "Shared \"X\" with u2"),
        ]);
        assert_eq!(log.failures_in(Tab::Top), 2);
        assert_eq!(log.failures_in(Tab::Search), 0);
    }

    #[test]
    fn test_clear_respects_filter() {
        let mut log = log_with(&[
            (LogLevel::Info, Tab::Feed, "Feed loaded"),
            (LogLevel::Error, Tab::Search, "Share failed: API error 500"),
        ]);

        log.filter = Some(Tab::Search);
        log.clear();
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].tab, Tab::Feed);

        log.filter = None;
        log.clear();
        assert!(log.entries.is_empty());
    }
}
