//! # Search & share
//!
//! Search the catalog, pick a track, pick a recipient, send it.
//!
//! [`ShareFlow`] is the view-model behind the panel. It owns the pending
//! share target (at most one track at a time), the recipient options and
//! the message draft. [`run_search`] and [`submit_share`] are the two
//! network actions; both refuse to issue a request when there is nothing
//! to send.

use api::{ApiError, Backend, NewShare, Track, User, UserId};
use dioxus::prelude::*;

use crate::Icon;
use crate::activity_log::{LogLevel, log_activity, use_activity_log};
use crate::icons::{FaMagnifyingGlass, FaPaperPlane};
use crate::notify::alert;
use crate::session::use_backend;
use crate::tabs::{Tab, use_active_tab, use_feed_refresh};
use crate::track_card::TrackCard;

use super::{EmptyState, ModalOverlay};

pub const NO_RECIPIENTS: &str = "No other users yet";
pub const NO_RESULTS: &str = "No results.";
pub const SEARCH_FAILED: &str = "Search failed.";

/// One `<option>` in the recipient selector.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Options for the recipient selector. With nobody to send to, the list is
/// a single disabled placeholder.
pub fn recipient_options(users: &[User]) -> Vec<RecipientOption> {
    if users.is_empty() {
        return vec![RecipientOption {
            value: String::new(),
            label: NO_RECIPIENTS.to_string(),
            disabled: true,
        }];
    }
    users
        .iter()
        .map(|u| RecipientOption {
            value: u.id.to_string(),
            label: u.label().to_string(),
            disabled: false,
        })
        .collect()
}

/// State of the share form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareFlow {
    pending: Option<Track>,
    form_visible: bool,
    recipients: Vec<RecipientOption>,
    recipient: Option<UserId>,
    pub message: String,
}

impl ShareFlow {
    pub fn pending(&self) -> Option<&Track> {
        self.pending.as_ref()
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn recipients(&self) -> &[RecipientOption] {
        &self.recipients
    }

    pub fn recipient(&self) -> Option<&UserId> {
        self.recipient.as_ref()
    }

    /// Make `track` the pending share target, replacing any previous one,
    /// and open the form. Recipients are reloaded for every selection.
    pub fn select(&mut self, track: Track) {
        self.pending = Some(track);
        self.form_visible = true;
        self.recipients.clear();
        self.recipient = None;
    }

    /// Fill the recipient selector from a `GET /api/users` result. A failed
    /// load is shown the same way as an empty one.
    pub fn set_recipients(&mut self, users: Result<Vec<User>, ApiError>) {
        let users = users.unwrap_or_default();
        self.recipients = recipient_options(&users);
        self.recipient = users.first().map(|u| u.id.clone());
    }

    pub fn choose_recipient(&mut self, value: &str) {
        self.recipient = self
            .recipients
            .iter()
            .find(|o| !o.disabled && o.value == value)
            .map(|o| UserId::from(o.value.as_str()));
    }

    pub fn can_send(&self) -> bool {
        self.pending.is_some() && self.recipient.is_some()
    }

    /// Request body for the current form, if it is complete.
    pub fn request(&self) -> Option<NewShare> {
        let track = self.pending.as_ref()?;
        let to = self.recipient.clone()?;
        Some(NewShare::new(track, to, self.message.clone()))
    }

    /// Close the form, dropping the pending target and the message draft.
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.form_visible = false;
        self.message.clear();
    }

    /// Close the form after `sent` went through, unless the form has since
    /// moved on to another track or recipient.
    pub fn complete(&mut self, sent: &NewShare) {
        let same_track = self.pending.as_ref().is_some_and(|t| t.id == sent.track_id);
        if same_track && self.recipient.as_ref() == Some(&sent.to_user_id) {
            self.dismiss();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank query; nothing was sent.
    Rejected,
    Found(Vec<Track>),
    Failed(ApiError),
}

pub async fn run_search<B: Backend>(backend: &B, query: &str) -> SearchOutcome {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::Rejected;
    }
    match backend.search(query).await {
        Ok(tracks) => SearchOutcome::Found(tracks),
        Err(e) => SearchOutcome::Failed(e),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    /// No track selected; nothing was sent.
    NothingPending,
    /// No recipient available; nothing was sent.
    NoRecipient,
    Sent(NewShare),
    Failed(ApiError),
}

/// Post the pending share. On success the form is closed and the pending
/// target and message are cleared; on failure the form is left as is.
pub async fn submit_share<B: Backend>(backend: &B, flow: &mut ShareFlow) -> ShareOutcome {
    if flow.pending.is_none() {
        return ShareOutcome::NothingPending;
    }
    let Some(share) = flow.request() else {
        return ShareOutcome::NoRecipient;
    };
    match backend.share(&share).await {
        Ok(()) => {
            flow.complete(&share);
            ShareOutcome::Sent(share)
        }
        Err(e) => ShareOutcome::Failed(e),
    }
}

#[component]
pub fn SearchView() -> Element {
    let backend = use_backend();
    let mut activity_log = use_activity_log();
    let mut active_tab = use_active_tab();
    let feed_refresh = use_feed_refresh();

    let mut query = use_signal(String::new);
    let mut results = use_signal(|| Option::<SearchOutcome>::None);
    let mut flow = use_signal(ShareFlow::default);

    let on_search = use_callback({
        let backend = backend.clone();
        move |_: ()| {
            let backend = backend.clone();
            let q = query();
            spawn(async move {
                let outcome = run_search(&backend, &q).await;
                match &outcome {
                    SearchOutcome::Rejected => return,
                    SearchOutcome::Found(tracks) => log_activity(
                        &mut activity_log,
                        Tab::Search,
                        LogLevel::Info,
                        &format!("Search \"{}\": {} results", q.trim(), tracks.len()),
                    ),
                    SearchOutcome::Failed(e) => log_activity(
                        &mut activity_log,
                        Tab::Search,
                        LogLevel::Warning,
                        &format!("Search \"{}\" failed: {e}", q.trim()),
                    ),
                }
                results.set(Some(outcome));
            });
        }
    });

    let on_select = use_callback({
        let backend = backend.clone();
        move |track: Track| {
            flow.write().select(track);
            let backend = backend.clone();
            spawn(async move {
                let users = backend.users().await;
                if let Err(e) = &users {
                    log_activity(
                        &mut activity_log,
                        Tab::Search,
                        LogLevel::Warning,
                        &format!("Recipients: {e}"),
                    );
                }
                flow.write().set_recipients(users);
            });
        }
    });

    let on_send = use_callback(move |_: ()| {
        let backend = backend.clone();
        spawn(async move {
            // Submit from a snapshot; the live form may change while the
            // request is in flight.
            let mut snapshot = flow();
            let outcome = submit_share(&backend, &mut snapshot).await;
            match outcome {
                ShareOutcome::NothingPending | ShareOutcome::NoRecipient => {}
                ShareOutcome::Sent(share) => {
                    flow.write().complete(&share);
                    log_activity(
                        &mut activity_log,
                        Tab::Search,
                        LogLevel::Success,
                        &format!("Shared \"{}\" with {}", share.track_name, share.to_user_id),
                    );
                    alert("Song shared!");
                    active_tab.set(Tab::Feed);
                    feed_refresh.bump();
                }
                ShareOutcome::Failed(e) => {
                    log_activity(
                        &mut activity_log,
                        Tab::Search,
                        LogLevel::Error,
                        &format!("Share failed: {e}"),
                    );
                    alert("Failed to share song.");
                }
            }
        });
    });

    rsx! {
        div {
            class: "search",
            h2 { class: "panel-title", "Share a song" }
            div {
                class: "search-bar",
                input {
                    r#type: "search",
                    placeholder: "Search for a track or artist",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_search.call(());
                        }
                    },
                }
                button {
                    class: "primary",
                    onclick: move |_| on_search.call(()),
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    span { "Search" }
                }
            }

            {match results() {
                None | Some(SearchOutcome::Rejected) => rsx! {},
                Some(SearchOutcome::Failed(_)) => rsx! { EmptyState { message: SEARCH_FAILED } },
                Some(SearchOutcome::Found(tracks)) if tracks.is_empty() => rsx! {
                    EmptyState { message: NO_RESULTS }
                },
                Some(SearchOutcome::Found(tracks)) => rsx! {
                    div {
                        class: "card-list",
                        for track in tracks {
                            SearchResultCard { key: "{track.id}", track: track.clone(), on_select }
                        }
                    }
                },
            }}

            if flow().form_visible() {
                ModalOverlay {
                    on_close: move |_| flow.write().dismiss(),
                    ShareForm { flow, on_send }
                }
            }
        }
    }
}

#[component]
fn SearchResultCard(track: Track, on_select: Callback<Track>) -> Element {
    let selected = track.clone();

    rsx! {
        TrackCard {
            name: track.name.clone(),
            artist: track.artist.clone(),
            image: track.image().map(str::to_string),
            link: track.link().map(str::to_string),
            actions: rsx! {
                button {
                    class: "share-btn",
                    onclick: move |_| on_select.call(selected.clone()),
                    Icon { icon: FaPaperPlane, width: 12, height: 12 }
                    span { "Share" }
                }
            },
        }
    }
}

#[component]
fn ShareForm(flow: Signal<ShareFlow>, on_send: Callback<()>) -> Element {
    let mut flow = flow;
    let state = flow();
    let Some(track) = state.pending().cloned() else {
        return rsx! {};
    };
    let selected = state.recipient().map(UserId::to_string).unwrap_or_default();
    let options = state.recipients().to_vec();
    let loading = options.is_empty();

    rsx! {
        div {
            class: "share-form",
            h3 { "Send \u{201c}{track.name}\u{201d}" }
            p { class: "share-form-artist", "{track.artist}" }

            label { r#for: "share-recipient", "To" }
            select {
                id: "share-recipient",
                disabled: loading,
                value: "{selected}",
                onchange: move |evt: FormEvent| flow.write().choose_recipient(&evt.value()),
                if loading {
                    option { value: "", disabled: true, "Loading…" }
                }
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        disabled: opt.disabled,
                        "{opt.label}"
                    }
                }
            }

            label { r#for: "share-message", "Message" }
            textarea {
                id: "share-message",
                placeholder: "Say something about it (optional)",
                value: state.message.clone(),
                oninput: move |evt: FormEvent| flow.write().message = evt.value(),
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: !state.can_send(),
                    onclick: move |_| on_send.call(()),
                    "Send"
                }
                button {
                    class: "secondary",
                    onclick: move |_| flow.write().dismiss(),
                    "Cancel"
                }
            }
        }
    }
}
