use dioxus::prelude::*;

use crate::Icon;
use crate::brand_icons::FaSpotify;

const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

/// Keep only `http`/`https` URLs for `src` and `href`.
fn usable_url(value: Option<String>) -> Option<String> {
    value.and_then(|v| api::web_url(&v).map(str::to_string))
}

/// Card for anything track-shaped: search results, top tracks, shared songs.
///
/// Text props are rendered as text nodes, so server-supplied names and
/// messages are escaped. Empty optional strings render nothing, and URLs
/// other than `http`/`https` are never placed in `src` or `href`.
#[component]
pub fn TrackCard(
    name: String,
    artist: String,
    image: Option<String>,
    /// Extra line under the artist (rank, sender, date).
    meta: Option<String>,
    /// External "open in Spotify" link.
    link: Option<String>,
    /// Controls rendered at the bottom of the card; pass `rsx! {}` for none.
    actions: Element,
) -> Element {
    let image = usable_url(image);
    let meta = meta.filter(|s| !s.is_empty());
    let link = usable_url(link);

    rsx! {
        document::Stylesheet { href: CARDS_CSS }
        article {
            class: "track-card",
            if let Some(src) = image {
                img { class: "track-card-art", src: "{src}", alt: "" }
            }
            div {
                class: "track-card-body",
                div { class: "track-card-name", "{name}" }
                div { class: "track-card-artist", "{artist}" }
                if let Some(meta) = meta {
                    div { class: "track-card-meta", "{meta}" }
                }
                if let Some(href) = link {
                    a {
                        class: "track-card-link",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { icon: FaSpotify, width: 12, height: 12 }
                        span { "Open in Spotify" }
                    }
                }
                div { class: "track-card-actions", {actions} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_urls_must_be_web_urls() {
        assert_eq!(usable_url(None), None);
        assert_eq!(usable_url(Some(String::new())), None);
        assert_eq!(usable_url(Some("javascript:alert(document.cookie)".into())), None);
        assert_eq!(
            usable_url(Some("https://open.spotify.com/track/t1".into())).as_deref(),
            Some("https://open.spotify.com/track/t1")
        );
    }
}
