//! # Shared songs and reactions
//!
//! [`SharedSong`] is the read-only copy of a share record the feed renders.
//! [`NewShare`] and [`ReactRequest`] are the request bodies for
//! `POST /api/share` and `POST /api/react`.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::track::{non_empty, web_url_field, Track};
use super::user::UserId;

/// A like or dislike on a shared song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    pub const ALL: [Reaction; 2] = [Reaction::Like, Reaction::Dislike];

    pub fn as_str(self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A track one user sent to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedSong {
    pub id: i64,
    pub from_user_id: UserId,
    pub from_name: String,
    #[serde(default)]
    pub to_user_id: Option<UserId>,
    #[serde(default)]
    pub track_id: Option<String>,
    pub track_name: String,
    pub artist_name: String,
    #[serde(default)]
    pub album_image: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub my_reaction: Option<Reaction>,
}

impl SharedSong {
    pub fn image(&self) -> Option<&str> {
        web_url_field(&self.album_image)
    }

    pub fn link(&self) -> Option<&str> {
        web_url_field(&self.spotify_url)
    }

    pub fn message(&self) -> Option<&str> {
        non_empty(&self.message)
    }

    /// Whether `me` is the sender of this share.
    pub fn sent_by(&self, me: &UserId) -> bool {
        &self.from_user_id == me
    }

    /// `created_at` formatted for display, e.g. `Jan 1, 2024`.
    pub fn shared_on(&self) -> String {
        format_date(&self.created_at)
    }
}

/// Formats a backend timestamp as `Mon D, YYYY`.
///
/// Accepts RFC 3339 as well as the zone-less forms SQLite and Postgres emit.
/// Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}

/// Body of `POST /api/share`.
///
/// Optional track fields go over the wire as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShare {
    pub to_user_id: UserId,
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_image: String,
    pub preview_url: String,
    pub spotify_url: String,
    pub message: String,
}

impl NewShare {
    pub fn new(track: &Track, to_user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            to_user_id,
            track_id: track.id.clone(),
            track_name: track.name.clone(),
            artist_name: track.artist.clone(),
            album_image: track.album_image.clone().unwrap_or_default(),
            preview_url: track.preview_url.clone().unwrap_or_default(),
            spotify_url: track.spotify_url.clone().unwrap_or_default(),
            message: message.into(),
        }
    }
}

/// Body of `POST /api/react`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactRequest {
    pub shared_song_id: i64,
    pub reaction: Reaction,
}
