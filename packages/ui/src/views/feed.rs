use api::{ApiError, Backend, Reaction, SharedSong, UserId};
use dioxus::prelude::*;

use crate::activity_log::{LogLevel, log_activity, use_activity_log};
use crate::reaction::ReactionButtons;
use crate::session::{use_backend, use_session};
use crate::tabs::{Tab, use_feed_refresh};
use crate::track_card::TrackCard;

use super::EmptyState;

pub const FEED_EMPTY: &str = "No songs shared yet. Search for something to send!";
pub const FEED_FAILED: &str = "Couldn't load your feed.";

/// Whether a share was sent by the current user or received from someone.
#[derive(Debug, Clone, PartialEq)]
pub enum Direction {
    Sent,
    Received { from: String },
}

impl Direction {
    pub fn label(&self) -> String {
        match self {
            Direction::Sent => "You sent".to_string(),
            Direction::Received { from } => format!("From {from}"),
        }
    }
}

/// One rendered feed card.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: i64,
    pub direction: Direction,
    pub track_name: String,
    pub artist_name: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub message: Option<String>,
    pub date: String,
    pub reaction: Option<Reaction>,
}

impl FeedEntry {
    pub fn new(song: &SharedSong, me: Option<&UserId>) -> Self {
        let direction = match me {
            Some(me) if song.sent_by(me) => Direction::Sent,
            _ => Direction::Received {
                from: song.from_name.clone(),
            },
        };
        Self {
            id: song.id,
            direction,
            track_name: song.track_name.clone(),
            artist_name: song.artist_name.clone(),
            image: song.image().map(str::to_string),
            link: song.link().map(str::to_string),
            message: song.message().map(str::to_string),
            date: song.shared_on(),
            reaction: song.my_reaction,
        }
    }

    /// Direction and date, e.g. `From Al · Jan 1, 2024`.
    pub fn meta(&self) -> String {
        format!("{} · {}", self.direction.label(), self.date)
    }

    pub fn quoted_message(&self) -> Option<String> {
        self.message.as_ref().map(|m| format!("\u{201c}{m}\u{201d}"))
    }
}

/// What the feed panel shows after a load.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Empty,
    Failed,
    Loaded(Vec<FeedEntry>),
}

impl FeedState {
    pub fn from_result(result: Result<Vec<SharedSong>, ApiError>, me: Option<&UserId>) -> Self {
        match result {
            Ok(songs) if songs.is_empty() => FeedState::Empty,
            Ok(songs) => FeedState::Loaded(songs.iter().map(|s| FeedEntry::new(s, me)).collect()),
            Err(_) => FeedState::Failed,
        }
    }
}

pub async fn load_feed<B: Backend>(backend: &B, me: Option<&UserId>) -> (FeedState, Option<ApiError>) {
    let result = backend.shared_songs().await;
    let error = result.as_ref().err().cloned();
    (FeedState::from_result(result, me), error)
}

#[component]
pub fn FeedView() -> Element {
    let session = use_session();
    let refresh = use_feed_refresh();
    let backend = use_backend();
    let mut activity_log = use_activity_log();

    let feed = use_resource(move || {
        let backend = backend.clone();
        // Subscribe so a share elsewhere reloads the feed.
        let _generation = (refresh.0)();
        async move {
            let me = session().user_id;
            let (state, error) = load_feed(&backend, me.as_ref()).await;
            match error {
                Some(e) => {
                    log_activity(
                        &mut activity_log,
                        Tab::Feed,
                        LogLevel::Warning,
                        &format!("Feed: {e}"),
                    );
                }
                None => log_activity(&mut activity_log, Tab::Feed, LogLevel::Info, "Feed loaded"),
            }
            state
        }
    });

    rsx! {
        div {
            class: "feed",
            h2 { class: "panel-title", "Shared with you" }
            {match &*feed.read() {
                None => rsx! { p { class: "loading", "Loading…" } },
                Some(FeedState::Empty) => rsx! { EmptyState { message: FEED_EMPTY } },
                Some(FeedState::Failed) => rsx! { EmptyState { message: FEED_FAILED } },
                Some(FeedState::Loaded(entries)) => rsx! {
                    div {
                        class: "card-list",
                        for entry in entries.iter().cloned() {
                            FeedCard { key: "{entry.id}", entry: entry.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn FeedCard(entry: FeedEntry) -> Element {
    let meta = entry.meta();
    let quoted = entry.quoted_message();

    rsx! {
        TrackCard {
            name: entry.track_name.clone(),
            artist: entry.artist_name.clone(),
            image: entry.image.clone(),
            meta: Some(meta),
            link: entry.link.clone(),
            actions: rsx! {
                if let Some(quoted) = quoted {
                    p { class: "track-card-message", "{quoted}" }
                }
                ReactionButtons { shared_song_id: entry.id, initial: entry.reaction }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryBackend;

    fn fixture() -> Vec<SharedSong> {
        serde_json::from_str(
            r#"[{"id":1,"from_user_id":2,"from_name":"Al","track_name":"X","artist_name":"Y","message":"nice","created_at":"2024-01-01T00:00:00Z","my_reaction":null}]"#,
        )
        .unwrap()
    }

    fn song(id: i64, from: &str, from_name: &str) -> SharedSong {
        SharedSong {
            id,
            from_user_id: UserId::from(from),
            from_name: from_name.into(),
            to_user_id: None,
            track_id: None,
            track_name: format!("Track {id}"),
            artist_name: "Artist".into(),
            album_image: Some(String::new()),
            preview_url: None,
            spotify_url: None,
            message: None,
            created_at: "2024-05-02 08:00:00".into(),
            my_reaction: None,
        }
    }

    #[tokio::test]
    async fn test_feed_end_to_end_fixture() {
        let backend = MemoryBackend::new().with_shared(fixture());
        let me = UserId::from("1");

        let (state, error) = load_feed(&backend, Some(&me)).await;

        assert!(error.is_none());
        let FeedState::Loaded(entries) = state else {
            panic!("expected a loaded feed");
        };
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.direction.label(), "From Al");
        assert_eq!(entry.quoted_message().as_deref(), Some("\u{201c}nice\u{201d}"));
        assert_eq!(entry.date, "Jan 1, 2024");
        assert_eq!(entry.meta(), "From Al · Jan 1, 2024");
        assert_eq!(entry.reaction, None);
        assert_eq!(backend.calls(), vec!["GET /api/shared".to_string()]);
    }

    #[test]
    fn test_one_entry_per_song_with_direction() {
        let me = UserId::from("me");
        let songs = vec![song(1, "me", "Me"), song(2, "bo", "Bo"), song(3, "me", "Me")];

        let FeedState::Loaded(entries) = FeedState::from_result(Ok(songs), Some(&me)) else {
            panic!("expected entries");
        };

        assert_eq!(entries.len(), 3);
        let labels: Vec<String> = entries.iter().map(|e| e.direction.label()).collect();
        assert_eq!(labels, vec!["You sent", "From Bo", "You sent"]);
        assert!(entries.iter().all(|e| e.image.is_none()));
        assert!(entries.iter().all(|e| e.quoted_message().is_none()));
    }

    #[test]
    fn test_script_link_in_a_received_share_is_not_rendered() {
        let mut hostile = song(4, "eve", "Eve");
        hostile.spotify_url = Some("javascript:alert(document.cookie)".into());
        hostile.album_image = Some("javascript:alert(1)".into());

        let entry = FeedEntry::new(&hostile, Some(&UserId::from("me")));

        assert_eq!(entry.link, None);
        assert_eq!(entry.image, None);
    }

    #[test]
    fn test_without_session_everything_is_received() {
        let FeedState::Loaded(entries) = FeedState::from_result(Ok(vec![song(1, "me", "Me")]), None) else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].direction, Direction::Received { from: "Me".into() });
    }

    #[tokio::test]
    async fn test_empty_and_failed_feeds() {
        let empty = MemoryBackend::new();
        assert_eq!(load_feed(&empty, None).await.0, FeedState::Empty);

        let failing = MemoryBackend::new().failing_with(500);
        let (state, error) = load_feed(&failing, None).await;
        assert_eq!(state, FeedState::Failed);
        assert_eq!(error, Some(ApiError::Status(500)));
    }
}
