use api::{ApiError, Backend, CompareResult, User, UserId};
use dioxus::prelude::*;

use crate::activity_log::{LogLevel, log_activity, use_activity_log};
use crate::notify::alert;
use crate::session::use_backend;
use crate::tabs::Tab;

use super::EmptyState;

pub const NONE_YET: &str = "None yet";
pub const NO_ONE_TO_COMPARE: &str = "No other users to compare with yet.";

/// Items for a compare list; an empty list becomes a single placeholder.
pub fn list_items(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        vec![NONE_YET.to_string()]
    } else {
        items.to_vec()
    }
}

/// Render-ready compatibility summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareSummary {
    pub score: f64,
    pub shared_track_count: u32,
    pub shared_artists: Vec<String>,
    pub my_genres: Vec<String>,
    pub their_genres: Vec<String>,
}

impl CompareSummary {
    /// `72.5%`, or `40%` for whole numbers.
    pub fn score_label(&self) -> String {
        if self.score.fract() == 0.0 {
            format!("{:.0}%", self.score)
        } else {
            format!("{:.1}%", self.score)
        }
    }
}

impl From<CompareResult> for CompareSummary {
    fn from(result: CompareResult) -> Self {
        Self {
            score: result.compatibility_score,
            shared_track_count: result.shared_track_count,
            shared_artists: list_items(&result.shared_artists),
            my_genres: list_items(&result.my_top_genres),
            their_genres: list_items(&result.their_top_genres),
        }
    }
}

/// Compare against `other`. Without a selection nothing is requested and
/// `None` is returned.
pub async fn run_compare<B: Backend>(
    backend: &B,
    other: Option<&UserId>,
) -> Option<Result<CompareSummary, ApiError>> {
    let other = other.filter(|id| !id.is_empty())?;
    Some(backend.compare(other).await.map(CompareSummary::from))
}

/// Selected user and the result shown for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompareSelection {
    selected: Option<UserId>,
    summary: Option<CompareSummary>,
}

impl CompareSelection {
    pub fn selected(&self) -> Option<&UserId> {
        self.selected.as_ref()
    }

    pub fn summary(&self) -> Option<&CompareSummary> {
        self.summary.as_ref()
    }

    /// Pick a user from the selector value; any previous result is dropped.
    pub fn select(&mut self, value: &str) {
        self.selected = (!value.is_empty()).then(|| UserId::from(value));
        self.summary = None;
    }

    /// Apply the outcome of comparing against `other`. Outcomes for a user
    /// that is no longer selected are ignored. A failure clears the result
    /// and is handed back.
    pub fn apply(
        &mut self,
        other: Option<&UserId>,
        outcome: Option<Result<CompareSummary, ApiError>>,
    ) -> Option<ApiError> {
        if other != self.selected.as_ref() {
            return None;
        }
        match outcome? {
            Ok(summary) => {
                self.summary = Some(summary);
                None
            }
            Err(e) => {
                self.summary = None;
                Some(e)
            }
        }
    }
}

#[component]
pub fn CompareView() -> Element {
    let backend = use_backend();
    let mut activity_log = use_activity_log();
    let mut selection = use_signal(CompareSelection::default);

    let users = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move {
                match backend.users().await {
                    Ok(users) => users,
                    Err(e) => {
                        log_activity(
                            &mut activity_log,
                            Tab::Compare,
                            LogLevel::Warning,
                            &format!("Compare users: {e}"),
                        );
                        Vec::new()
                    }
                }
            }
        }
    });

    let on_compare = move |_| {
        let backend = backend.clone();
        spawn(async move {
            let other = selection().selected;
            let outcome = run_compare(&backend, other.as_ref()).await;
            let label = outcome
                .as_ref()
                .and_then(|r| r.as_ref().ok())
                .map(CompareSummary::score_label);
            let error = selection.write().apply(other.as_ref(), outcome);
            match error {
                Some(e) => {
                    log_activity(
                        &mut activity_log,
                        Tab::Compare,
                        LogLevel::Error,
                        &format!("Compare failed: {e}"),
                    );
                    alert("Failed to compare.");
                }
                None => {
                    if let (Some(id), Some(label)) = (&other, label) {
                        log_activity(
                            &mut activity_log,
                            Tab::Compare,
                            LogLevel::Info,
                            &format!("Compared with {id}: {label}"),
                        );
                    }
                }
            }
        });
    };

    let user_list: Option<Vec<User>> = users.read().clone();

    rsx! {
        div {
            class: "compare",
            h2 { class: "panel-title", "Compare taste" }

            {match user_list {
                None => rsx! { p { class: "loading", "Loading…" } },
                Some(list) if list.is_empty() => rsx! { EmptyState { message: NO_ONE_TO_COMPARE } },
                Some(list) => rsx! {
                    div {
                        class: "compare-controls",
                        select {
                            value: selection().selected().map(UserId::to_string).unwrap_or_default(),
                            onchange: move |evt: FormEvent| selection.write().select(&evt.value()),
                            option { value: "", "Choose someone…" }
                            for user in list {
                                option {
                                    key: "{user.id}",
                                    value: "{user.id}",
                                    "{user.label()}"
                                }
                            }
                        }
                        button {
                            class: "primary",
                            disabled: selection().selected().is_none(),
                            onclick: on_compare,
                            "Compare"
                        }
                    }
                },
            }}

            if let Some(result) = selection().summary().cloned() {
                CompareResultView { summary: result }
            }
        }
    }
}

#[component]
fn CompareResultView(summary: CompareSummary) -> Element {
    rsx! {
        div {
            class: "compare-result",
            div {
                class: "compare-score",
                span { class: "compare-score-value", "{summary.score_label()}" }
                span { class: "compare-score-label", "compatible" }
            }
            p {
                class: "compare-shared-tracks",
                "{summary.shared_track_count} top tracks in common"
            }
            div {
                class: "compare-lists",
                CompareList { title: "Shared artists", items: summary.shared_artists.clone() }
                CompareList { title: "Your top genres", items: summary.my_genres.clone() }
                CompareList { title: "Their top genres", items: summary.their_genres.clone() }
            }
        }
    }
}

#[component]
fn CompareList(title: String, items: Vec<String>) -> Element {
    rsx! {
        div {
            class: "compare-list",
            h3 { "{title}" }
            ul {
                for (i, item) in items.iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryBackend;

    fn result(score: f64, shared: &[&str]) -> CompareResult {
        CompareResult {
            compatibility_score: score,
            shared_artists: shared.iter().map(|s| s.to_string()).collect(),
            shared_track_count: 2,
            my_top_genres: vec!["indie".into(), "shoegaze".into()],
            their_top_genres: vec![],
        }
    }

    #[tokio::test]
    async fn test_compare_without_selection_is_a_no_op() {
        let backend = MemoryBackend::new().with_compare(result(50.0, &[]));

        assert!(run_compare(&backend, None).await.is_none());
        assert!(run_compare(&backend, Some(&UserId::from(""))).await.is_none());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_compare_renders_score_and_three_lists() {
        let backend = MemoryBackend::new().with_compare(result(72.5, &["Slowdive"]));

        let summary = run_compare(&backend, Some(&UserId::from("u2")))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.score_label(), "72.5%");
        assert_eq!(summary.shared_track_count, 2);
        assert_eq!(summary.shared_artists, vec!["Slowdive"]);
        assert_eq!(summary.my_genres, vec!["indie", "shoegaze"]);
        assert_eq!(summary.their_genres, vec![NONE_YET]);
        assert_eq!(backend.calls(), vec!["GET /api/compare/u2".to_string()]);
    }

    #[test]
    fn test_each_empty_list_gets_exactly_one_placeholder() {
        let summary = CompareSummary::from(result(0.0, &[]));
        assert_eq!(summary.score_label(), "0%");
        assert_eq!(summary.shared_artists, vec![NONE_YET]);
        assert_eq!(summary.their_genres, vec![NONE_YET]);
    }

    #[test]
    fn test_changing_user_drops_previous_result() {
        let mut selection = CompareSelection::default();
        selection.select("u2");
        let other = selection.selected().cloned();
        selection.apply(other.as_ref(), Some(Ok(CompareSummary::from(result(60.0, &[])))));
        assert!(selection.summary().is_some());

        selection.select("u3");
        assert_eq!(selection.selected(), Some(&UserId::from("u3")));
        assert!(selection.summary().is_none());

        selection.select("");
        assert_eq!(selection.selected(), None);
    }

    #[tokio::test]
    async fn test_failed_compare_clears_result() {
        let mut selection = CompareSelection::default();
        selection.select("u2");
        let u2 = UserId::from("u2");
        selection.apply(Some(&u2), Some(Ok(CompareSummary::from(result(60.0, &[])))));

        let backend = MemoryBackend::new().failing_with(500);
        let outcome = run_compare(&backend, Some(&u2)).await;
        let error = selection.apply(Some(&u2), outcome);

        assert_eq!(error, Some(ApiError::Status(500)));
        assert!(selection.summary().is_none());
    }

    #[test]
    fn test_result_for_a_deselected_user_is_ignored() {
        let mut selection = CompareSelection::default();
        selection.select("u3");
        let stale = UserId::from("u2");

        let error = selection.apply(Some(&stale), Some(Ok(CompareSummary::from(result(90.0, &[])))));

        assert!(error.is_none());
        assert!(selection.summary().is_none());
    }

    #[tokio::test]
    async fn test_compare_failure_is_reported() {
        let backend = MemoryBackend::new().failing_with(404);
        let outcome = run_compare(&backend, Some(&UserId::from("ghost"))).await;
        assert_eq!(outcome, Some(Err(ApiError::Status(404))));
    }
}
