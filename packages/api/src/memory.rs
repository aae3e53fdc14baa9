use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    Artist, CompareResult, LyricQuote, NewShare, ReactRequest, Reaction, SharedSong, Track, User,
    UserId,
};

#[derive(Debug, Default)]
struct State {
    me: Option<(UserId, String)>,
    shared: Vec<SharedSong>,
    users: Vec<User>,
    search_results: Vec<Track>,
    compare: Option<CompareResult>,
    top_tracks: Vec<Track>,
    top_artists: Vec<Artist>,
    lyrics: Vec<LyricQuote>,
    failing: Option<u16>,
    calls: Vec<String>,
    shares: Vec<NewShare>,
    reactions: Vec<ReactRequest>,
}

/// In-memory [`Backend`] for tests.
///
/// Answers from canned data, records every call as `"METHOD /path"`, and can
/// be switched to fail every request with a fixed status.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Identity used as the sender of shares posted through this backend.
    pub fn with_me(self, id: impl Into<UserId>, name: impl Into<String>) -> Self {
        self.state().me = Some((id.into(), name.into()));
        self
    }

    pub fn with_shared(self, shared: Vec<SharedSong>) -> Self {
        self.state().shared = shared;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.state().users = users;
        self
    }

    pub fn with_search_results(self, tracks: Vec<Track>) -> Self {
        self.state().search_results = tracks;
        self
    }

    pub fn with_compare(self, result: CompareResult) -> Self {
        self.state().compare = Some(result);
        self
    }

    pub fn with_top_tracks(self, tracks: Vec<Track>) -> Self {
        self.state().top_tracks = tracks;
        self
    }

    pub fn with_top_artists(self, artists: Vec<Artist>) -> Self {
        self.state().top_artists = artists;
        self
    }

    pub fn with_lyrics(self, lyrics: Vec<LyricQuote>) -> Self {
        self.state().lyrics = lyrics;
        self
    }

    /// Make every subsequent call fail with `status`.
    pub fn failing_with(self, status: u16) -> Self {
        self.state().failing = Some(status);
        self
    }

    /// Calls issued so far, e.g. `["GET /api/shared", "POST /api/react"]`.
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    /// Share bodies posted so far.
    pub fn shares(&self) -> Vec<NewShare> {
        self.state().shares.clone()
    }

    /// Reactions posted so far.
    pub fn reactions(&self) -> Vec<ReactRequest> {
        self.state().reactions.clone()
    }

    fn record(&self, call: String) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.state();
        state.calls.push(call);
        match state.failing {
            Some(status) => Err(ApiError::Status(status)),
            None => Ok(state),
        }
    }
}

impl Backend for MemoryBackend {
    async fn shared_songs(&self) -> Result<Vec<SharedSong>, ApiError> {
        let state = self.record("GET /api/shared".into())?;
        Ok(state.shared.clone())
    }

    async fn react(&self, shared_song_id: i64, reaction: Reaction) -> Result<(), ApiError> {
        let mut state = self.record("POST /api/react".into())?;
        state.reactions.push(ReactRequest {
            shared_song_id,
            reaction,
        });
        if let Some(song) = state.shared.iter_mut().find(|s| s.id == shared_song_id) {
            song.my_reaction = Some(reaction);
        }
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>, ApiError> {
        let state = self.record(format!("GET /api/search?q={query}"))?;
        Ok(state.search_results.clone())
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        let state = self.record("GET /api/users".into())?;
        Ok(state.users.clone())
    }

    async fn share(&self, share: &NewShare) -> Result<(), ApiError> {
        let mut state = self.record("POST /api/share".into())?;
        let (from_user_id, from_name) = state
            .me
            .clone()
            .unwrap_or_else(|| (UserId::from("me"), "Me".to_string()));
        let id = state.shared.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        state.shared.insert(
            0,
            SharedSong {
                id,
                from_user_id,
                from_name,
                to_user_id: Some(share.to_user_id.clone()),
                track_id: Some(share.track_id.clone()),
                track_name: share.track_name.clone(),
                artist_name: share.artist_name.clone(),
                album_image: Some(share.album_image.clone()),
                preview_url: Some(share.preview_url.clone()),
                spotify_url: Some(share.spotify_url.clone()),
                message: Some(share.message.clone()),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                my_reaction: None,
            },
        );
        state.shares.push(share.clone());
        Ok(())
    }

    async fn compare(&self, other_id: &UserId) -> Result<CompareResult, ApiError> {
        let state = self.record(format!("GET /api/compare/{other_id}"))?;
        state.compare.clone().ok_or(ApiError::Status(404))
    }

    async fn top_tracks(&self) -> Result<Vec<Track>, ApiError> {
        let state = self.record("GET /api/me/top-tracks".into())?;
        Ok(state.top_tracks.clone())
    }

    async fn top_artists(&self) -> Result<Vec<Artist>, ApiError> {
        let state = self.record("GET /api/me/top-artists".into())?;
        Ok(state.top_artists.clone())
    }

    async fn top_lyrics(&self) -> Result<Vec<LyricQuote>, ApiError> {
        let state = self.record("GET /api/me/top-lyrics".into())?;
        Ok(state.lyrics.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.into(),
            name: format!("Track {id}"),
            artist: "Artist".into(),
            album_image: None,
            preview_url: None,
            spotify_url: None,
        }
    }

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let backend = MemoryBackend::new().with_search_results(vec![track("t1")]);

        assert!(backend.shared_songs().await.unwrap().is_empty());
        assert_eq!(backend.search("abba").await.unwrap().len(), 1);

        assert_eq!(
            backend.calls(),
            vec!["GET /api/shared".to_string(), "GET /api/search?q=abba".to_string()]
        );
    }

    #[tokio::test]
    async fn test_share_shows_up_in_feed() {
        let backend = MemoryBackend::new().with_me("u1", "Mina");

        let share = NewShare::new(&track("t9"), UserId::from("u2"), "for you");
        backend.share(&share).await.unwrap();

        let feed = backend.shared_songs().await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].from_user_id, UserId::from("u1"));
        assert_eq!(feed[0].message(), Some("for you"));
        assert_eq!(backend.shares(), vec![share]);
    }

    #[tokio::test]
    async fn test_react_updates_stored_reaction() {
        let backend = MemoryBackend::new().with_me("u1", "Mina");
        backend
            .share(&NewShare::new(&track("t1"), UserId::from("u2"), ""))
            .await
            .unwrap();
        let id = backend.shared_songs().await.unwrap()[0].id;

        backend.react(id, Reaction::Like).await.unwrap();

        let feed = backend.shared_songs().await.unwrap();
        assert_eq!(feed[0].my_reaction, Some(Reaction::Like));
        assert_eq!(backend.reactions().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_backend_still_records() {
        let backend = MemoryBackend::new().failing_with(503);

        let err = backend.users().await.unwrap_err();

        assert_eq!(err, ApiError::Status(503));
        assert_eq!(backend.calls(), vec!["GET /api/users".to_string()]);
    }

    #[tokio::test]
    async fn test_compare_without_data_is_not_found() {
        let backend = MemoryBackend::new();
        let err = backend.compare(&UserId::from("x")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
