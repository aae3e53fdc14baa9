//! # API crate: REST client for the Mixtape backend
//!
//! Everything the frontends need to talk to the music-sharing backend: the
//! wire types, a [`Backend`] trait with one method per endpoint, and two
//! implementations of it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `Track`, `SharedSong`, `User`, `CompareResult` and the request bodies |
//! | [`client`] | [`HttpBackend`], a `reqwest` client that attaches JSON headers and maps non-2xx statuses to [`ApiError::Status`] |
//! | [`config`] | [`ApiConfig`]: backend origin and the signed-in user, read from the host page |
//! | [`error`] | [`ApiError`] |
//!
//! [`MemoryBackend`] answers from canned data and records each call; the UI
//! crate's tests run against it.
//!
//! ## Endpoints
//!
//! - `GET /api/shared`, `POST /api/react`
//! - `GET /api/search?q=`, `GET /api/users`, `POST /api/share`
//! - `GET /api/compare/:id`
//! - `GET /api/me/top-tracks`, `GET /api/me/top-artists`, `GET /api/me/top-lyrics`

mod backend;
pub mod client;
pub mod config;
pub mod error;
mod memory;
pub mod models;

pub use backend::Backend;
pub use client::{HttpBackend, RequestOptions};
pub use config::ApiConfig;
pub use error::ApiError;
pub use memory::MemoryBackend;
pub use models::{
    web_url, Artist, CompareResult, LyricQuote, NewShare, ReactRequest, Reaction, SharedSong,
    Track, User, UserId,
};
