use api::{Backend, LyricQuote};
use dioxus::prelude::*;

use crate::activity_log::{LogLevel, log_activity, use_activity_log};
use crate::session::use_backend;
use crate::tabs::Tab;

/// Seconds each quote stays on screen.
pub const ROTATE_SECS: u64 = 8;

/// Cycles through lyric quotes, wrapping at the end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LyricsRotation {
    quotes: Vec<LyricQuote>,
    index: usize,
}

impl LyricsRotation {
    pub fn new(quotes: Vec<LyricQuote>) -> Self {
        Self { quotes, index: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn current(&self) -> Option<&LyricQuote> {
        self.quotes.get(self.index)
    }

    pub fn advance(&mut self) {
        if !self.quotes.is_empty() {
            self.index = (self.index + 1) % self.quotes.len();
        }
    }

    /// The quote on screen in curly quotes, followed by its attribution.
    pub fn caption(&self) -> Option<String> {
        self.current()
            .map(|q| format!("\u{201c}{}\u{201d} \u{2014} {}", q.text, q.attr))
    }
}

/// Empty on failure; the ticker simply stays hidden.
pub async fn load_lyrics<B: Backend>(backend: &B) -> (LyricsRotation, Option<api::ApiError>) {
    match backend.top_lyrics().await {
        Ok(quotes) => (LyricsRotation::new(quotes), None),
        Err(e) => (LyricsRotation::default(), Some(e)),
    }
}

#[component]
pub fn LyricsTicker() -> Element {
    let backend = use_backend();
    let mut activity_log = use_activity_log();
    let mut rotation = use_signal(LyricsRotation::default);

    use_hook(move || {
        spawn(async move {
            let (loaded, error) = load_lyrics(&backend).await;
            if let Some(e) = error {
                log_activity(
                    &mut activity_log,
                    Tab::Top,
                    LogLevel::Warning,
                    &format!("Lyrics: {e}"),
                );
            }
            let rotate = !loaded.is_empty();
            rotation.set(loaded);

            // Only the browser build keeps cycling; elsewhere the first quote stays.
            #[cfg(target_arch = "wasm32")]
            if rotate {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(ROTATE_SECS)).await;
                    rotation.write().advance();
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = rotate;
        });
    });

    let caption = rotation.read().caption();

    rsx! {
        if let Some(caption) = caption {
            p { class: "lyrics-ticker", "{caption}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryBackend;

    fn quote(text: &str) -> LyricQuote {
        LyricQuote {
            text: text.into(),
            attr: "Song \u{2014} Band".into(),
        }
    }

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = LyricsRotation::new(vec![quote("one"), quote("two")]);
        assert_eq!(rotation.current().map(|q| q.text.as_str()), Some("one"));
        rotation.advance();
        assert_eq!(rotation.current().map(|q| q.text.as_str()), Some("two"));
        rotation.advance();
        assert_eq!(rotation.current().map(|q| q.text.as_str()), Some("one"));
    }

    #[test]
    fn test_empty_rotation_has_no_caption() {
        let mut rotation = LyricsRotation::default();
        rotation.advance();
        assert!(rotation.caption().is_none());
    }

    #[test]
    fn test_caption_format() {
        let rotation = LyricsRotation::new(vec![quote("hold on")]);
        assert_eq!(
            rotation.caption().as_deref(),
            Some("\u{201c}hold on\u{201d} \u{2014} Song \u{2014} Band")
        );
    }

    #[tokio::test]
    async fn test_failed_lyrics_load_is_empty() {
        let backend = MemoryBackend::new().failing_with(503);
        let (rotation, error) = load_lyrics(&backend).await;
        assert!(rotation.is_empty());
        assert_eq!(error, Some(api::ApiError::Status(503)));

        let backend = MemoryBackend::new().with_lyrics(vec![quote("a")]);
        let (rotation, error) = load_lyrics(&backend).await;
        assert!(error.is_none());
        assert_eq!(backend.calls(), vec!["GET /api/me/top-lyrics".to_string()]);
        assert!(!rotation.is_empty());
    }
}
