use crate::error::ApiError;
use crate::models::{Artist, CompareResult, LyricQuote, NewShare, Reaction, SharedSong, Track, User, UserId};

/// Async interface to the music-sharing backend.
///
/// One method per REST endpoint. Each call is a single attempt; there are
/// no retries or timeouts at this layer.
pub trait Backend {
    /// `GET /api/shared`
    fn shared_songs(&self) -> impl std::future::Future<Output = Result<Vec<SharedSong>, ApiError>>;

    /// `POST /api/react`
    fn react(
        &self,
        shared_song_id: i64,
        reaction: Reaction,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `GET /api/search?q=<query>`
    fn search(&self, query: &str) -> impl std::future::Future<Output = Result<Vec<Track>, ApiError>>;

    /// `GET /api/users`
    fn users(&self) -> impl std::future::Future<Output = Result<Vec<User>, ApiError>>;

    /// `POST /api/share`
    fn share(&self, share: &NewShare) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `GET /api/compare/:other_id`
    fn compare(
        &self,
        other_id: &UserId,
    ) -> impl std::future::Future<Output = Result<CompareResult, ApiError>>;

    /// `GET /api/me/top-tracks`
    fn top_tracks(&self) -> impl std::future::Future<Output = Result<Vec<Track>, ApiError>>;

    /// `GET /api/me/top-artists`
    fn top_artists(&self) -> impl std::future::Future<Output = Result<Vec<Artist>, ApiError>>;

    /// `GET /api/me/top-lyrics`
    fn top_lyrics(&self) -> impl std::future::Future<Output = Result<Vec<LyricQuote>, ApiError>>;
}
