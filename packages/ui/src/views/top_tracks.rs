use api::{ApiError, Artist, Backend, Track};
use dioxus::prelude::*;

use crate::activity_log::{LogLevel, log_activity, use_activity_log};
use crate::session::use_backend;
use crate::tabs::Tab;
use crate::track_card::TrackCard;

use super::EmptyState;

pub const NO_TOP_TRACKS: &str = "No top tracks found.";
pub const NO_TOP_ARTISTS: &str = "No top artists found.";

/// Genres shown per artist.
const MAX_GENRES: usize = 3;

/// A top track with its 1-based rank label.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTrack {
    pub rank: String,
    pub track: Track,
}

pub fn ranked(tracks: Vec<Track>) -> Vec<RankedTrack> {
    tracks
        .into_iter()
        .enumerate()
        .map(|(i, track)| RankedTrack {
            rank: format!("#{}", i + 1),
            track,
        })
        .collect()
}

/// Comma-joined genres, capped at three.
pub fn genre_line(artist: &Artist) -> String {
    artist
        .genres
        .iter()
        .take(MAX_GENRES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `None` when there is nothing to rank.
pub async fn load_top_tracks<B: Backend>(backend: &B) -> Result<Option<Vec<RankedTrack>>, ApiError> {
    let tracks = backend.top_tracks().await?;
    Ok((!tracks.is_empty()).then(|| ranked(tracks)))
}

pub async fn load_top_artists<B: Backend>(backend: &B) -> Result<Option<Vec<Artist>>, ApiError> {
    let artists = backend.top_artists().await?;
    Ok((!artists.is_empty()).then_some(artists))
}

#[component]
pub fn TopTracksView() -> Element {
    let backend = use_backend();
    let mut activity_log = use_activity_log();

    let tracks = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move {
                load_top_tracks(&backend).await.unwrap_or_else(|e| {
                    log_activity(
                        &mut activity_log,
                        Tab::Top,
                        LogLevel::Warning,
                        &format!("Top tracks: {e}"),
                    );
                    None
                })
            }
        }
    });

    let artists = use_resource(move || {
        let backend = backend.clone();
        async move {
            load_top_artists(&backend).await.unwrap_or_else(|e| {
                log_activity(
                    &mut activity_log,
                    Tab::Top,
                    LogLevel::Warning,
                    &format!("Top artists: {e}"),
                );
                None
            })
        }
    });

    rsx! {
        div {
            class: "top",
            h2 { class: "panel-title", "Your top tracks" }
            {match &*tracks.read() {
                None => rsx! { p { class: "loading", "Loading…" } },
                Some(None) => rsx! { EmptyState { message: NO_TOP_TRACKS } },
                Some(Some(list)) => rsx! {
                    div {
                        class: "card-list",
                        for item in list.iter().cloned() {
                            TrackCard {
                                key: "{item.track.id}",
                                name: item.track.name.clone(),
                                artist: item.track.artist.clone(),
                                image: item.track.image().map(str::to_string),
                                meta: Some(item.rank.clone()),
                                link: item.track.link().map(str::to_string),
                                actions: rsx! {},
                            }
                        }
                    }
                },
            }}

            h2 { class: "panel-title", "Your top artists" }
            {match &*artists.read() {
                None => rsx! { p { class: "loading", "Loading…" } },
                Some(None) => rsx! { EmptyState { message: NO_TOP_ARTISTS } },
                Some(Some(list)) => rsx! {
                    ul {
                        class: "artist-list",
                        for artist in list.iter().cloned() {
                            ArtistRow { key: "{artist.id}", artist: artist.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn ArtistRow(artist: Artist) -> Element {
    let genres = genre_line(&artist);
    let image = artist.image().map(str::to_string);

    rsx! {
        li {
            class: "artist-row",
            if let Some(src) = image {
                img { class: "artist-row-image", src: "{src}", alt: "" }
            }
            div {
                class: "artist-row-body",
                span { class: "artist-row-name", "{artist.name}" }
                if !genres.is_empty() {
                    span { class: "artist-row-genres", "{genres}" }
                }
            }
        }
    }
}
