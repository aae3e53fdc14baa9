use serde::{Deserialize, Serialize};

/// Pairwise compatibility summary from `GET /api/compare/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    /// Percentage in `0..=100`, one decimal place.
    pub compatibility_score: f64,
    #[serde(default)]
    pub shared_artists: Vec<String>,
    #[serde(default)]
    pub shared_track_count: u32,
    #[serde(default)]
    pub my_top_genres: Vec<String>,
    #[serde(default)]
    pub their_top_genres: Vec<String>,
}
