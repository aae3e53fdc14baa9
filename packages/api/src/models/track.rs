use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Treat `Some("")` the way the backend means it: absent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// `raw` if it is an absolute `http`/`https` URL, else `None`.
///
/// Links and images come from other users' share records, so anything that
/// could run script when used as an `href` or `src` (`javascript:`, `data:`)
/// is dropped.
pub fn web_url(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(raw)
}

pub(crate) fn web_url_field(value: &Option<String>) -> Option<&str> {
    non_empty(value).and_then(web_url)
}

/// A catalog track, as returned by search and top-tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Comma-joined artist names.
    pub artist: String,
    #[serde(default)]
    pub album_image: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
}

impl Track {
    pub fn image(&self) -> Option<&str> {
        web_url_field(&self.album_image)
    }

    pub fn link(&self) -> Option<&str> {
        web_url_field(&self.spotify_url)
    }

    pub fn preview(&self) -> Option<&str> {
        web_url_field(&self.preview_url)
    }
}

/// One of the user's top artists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Artist {
    pub fn image(&self) -> Option<&str> {
        web_url_field(&self.image)
    }
}

/// A single lyric line picked from one of the user's top tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricQuote {
    pub text: String,
    /// Attribution naming the track and its artist.
    pub attr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_empty_fields_are_absent() {
        let track: Track = serde_json::from_str(
            r#"{"id":"t1","name":"Song","artist":"A, B","album_image":"","preview_url":null,"spotify_url":"https://open.spotify.com/track/t1"}"#,
        )
        .unwrap();
        assert_eq!(track.image(), None);
        assert_eq!(track.preview(), None);
        assert_eq!(track.link(), Some("https://open.spotify.com/track/t1"));
    }

    #[test]
    fn test_artist_genres_default_to_empty() {
        let artist: Artist = serde_json::from_str(r#"{"id":"a1","name":"Band"}"#).unwrap();
        assert!(artist.genres.is_empty());
        assert_eq!(artist.image(), None);
    }

    #[test]
    fn test_only_http_urls_are_usable() {
        assert_eq!(web_url("https://open.spotify.com/track/t1"), Some("https://open.spotify.com/track/t1"));
        assert_eq!(web_url("http://i.scdn.co/image/ab"), Some("http://i.scdn.co/image/ab"));
        assert_eq!(web_url("javascript:alert(document.cookie)"), None);
        assert_eq!(web_url("  JavaScript:alert(1)"), None);
        assert_eq!(web_url("data:text/html,<script>alert(1)</script>"), None);
        assert_eq!(web_url("/relative/path"), None);

        let artist = Artist {
            id: "a1".into(),
            name: "Band".into(),
            genres: vec![],
            image: Some("javascript:alert(1)".into()),
        };
        assert_eq!(artist.image(), None);
    }
}
