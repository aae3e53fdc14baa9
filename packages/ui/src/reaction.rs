//! Like/dislike buttons on feed cards.
//!
//! A click posts the reaction and, once the server accepts it, marks the
//! clicked button active and its sibling inactive. There is no re-fetch.
//! A failed post leaves the buttons as they were and raises the same alert
//! the other actions use.

use api::{ApiError, Backend, Reaction};
use dioxus::prelude::*;

use crate::Icon;
use crate::activity_log::{LogLevel, log_activity, use_activity_log};
use crate::icons::{FaThumbsDown, FaThumbsUp};
use crate::notify::alert;
use crate::session::use_backend;
use crate::tabs::Tab;

/// Which reaction button on a card is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReactionState {
    current: Option<Reaction>,
}

impl ReactionState {
    pub fn new(current: Option<Reaction>) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Option<Reaction> {
        self.current
    }

    pub fn is_active(&self, reaction: Reaction) -> bool {
        self.current == Some(reaction)
    }

    /// The clicked reaction becomes the only active one.
    pub fn apply(&mut self, reaction: Reaction) {
        self.current = Some(reaction);
    }

    pub fn class_for(&self, reaction: Reaction) -> &'static str {
        match (reaction, self.is_active(reaction)) {
            (Reaction::Like, true) => "react-btn like active",
            (Reaction::Like, false) => "react-btn like",
            (Reaction::Dislike, true) => "react-btn dislike active",
            (Reaction::Dislike, false) => "react-btn dislike",
        }
    }
}

/// Post `reaction` for a shared song and update `state` if it was accepted.
pub async fn send_reaction<B: Backend>(
    backend: &B,
    shared_song_id: i64,
    reaction: Reaction,
    state: &mut ReactionState,
) -> Result<(), ApiError> {
    backend.react(shared_song_id, reaction).await?;
    state.apply(reaction);
    Ok(())
}

#[component]
pub fn ReactionButtons(shared_song_id: i64, initial: Option<Reaction>) -> Element {
    let mut state = use_signal(move || ReactionState::new(initial));
    let mut activity_log = use_activity_log();
    let backend = use_backend();

    let on_react = use_callback(move |reaction: Reaction| {
        let backend = backend.clone();
        spawn(async move {
            let mut next = state();
            match send_reaction(&backend, shared_song_id, reaction, &mut next).await {
                Ok(()) => {
                    state.set(next);
                    log_activity(
                        &mut activity_log,
                        Tab::Feed,
                        LogLevel::Info,
                        &format!("Reacted {reaction} to share #{shared_song_id}"),
                    );
                }
                Err(e) => {
                    log_activity(
                        &mut activity_log,
                        Tab::Feed,
                        LogLevel::Error,
                        &format!("Reaction on share #{shared_song_id} failed: {e}"),
                    );
                    alert("Failed to save your reaction.");
                }
            }
        });
    });

    rsx! {
        div {
            class: "react-buttons",
            button {
                class: state().class_for(Reaction::Like),
                title: "Like",
                onclick: move |_| on_react.call(Reaction::Like),
                Icon { icon: FaThumbsUp, width: 14, height: 14 }
            }
            button {
                class: state().class_for(Reaction::Dislike),
                title: "Dislike",
                onclick: move |_| on_react.call(Reaction::Dislike),
                Icon { icon: FaThumbsDown, width: 14, height: 14 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryBackend, NewShare, Track, UserId};

    fn active_count(state: &ReactionState) -> usize {
        Reaction::ALL.iter().filter(|r| state.is_active(**r)).count()
    }

    #[test]
    fn test_initial_state_reflects_stored_reaction() {
        let none = ReactionState::new(None);
        assert_eq!(active_count(&none), 0);
        assert_eq!(none.class_for(Reaction::Like), "react-btn like");

        let liked = ReactionState::new(Some(Reaction::Like));
        assert!(liked.is_active(Reaction::Like));
        assert_eq!(liked.class_for(Reaction::Like), "react-btn like active");
        assert_eq!(liked.class_for(Reaction::Dislike), "react-btn dislike");
    }

    #[test]
    fn test_exactly_one_active_after_any_click_sequence() {
        let mut state = ReactionState::default();
        for click in [Reaction::Like, Reaction::Dislike, Reaction::Dislike, Reaction::Like] {
            state.apply(click);
            assert_eq!(active_count(&state), 1);
            assert!(state.is_active(click));
        }
    }

    async fn backend_with_one_share() -> (MemoryBackend, i64) {
        let backend = MemoryBackend::new().with_me("u1", "Mina");
        let track = Track {
            id: "t1".into(),
            name: "Song".into(),
            artist: "Band".into(),
            album_image: None,
            preview_url: None,
            spotify_url: None,
        };
        backend
            .share(&NewShare::new(&track, UserId::from("u2"), ""))
            .await
            .unwrap();
        let id = backend.shared_songs().await.unwrap()[0].id;
        (backend, id)
    }

    #[tokio::test]
    async fn test_send_reaction_applies_on_success() {
        let (backend, id) = backend_with_one_share().await;
        let mut state = ReactionState::default();

        send_reaction(&backend, id, Reaction::Like, &mut state).await.unwrap();
        send_reaction(&backend, id, Reaction::Dislike, &mut state).await.unwrap();

        assert_eq!(state.current(), Some(Reaction::Dislike));
        assert_eq!(active_count(&state), 1);
        assert_eq!(backend.reactions().len(), 2);
    }

    #[tokio::test]
    async fn test_send_reaction_keeps_state_on_failure() {
        let backend = MemoryBackend::new().failing_with(500);
        let mut state = ReactionState::new(Some(Reaction::Like));

        let err = send_reaction(&backend, 1, Reaction::Dislike, &mut state)
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Status(500));
        assert_eq!(state.current(), Some(Reaction::Like));
    }
}
