//! Rating change records produced by the engine

use serde::Serialize;

/// Outcome of a single Elo update of one player against one reference rating.
///
/// Built once per comparison and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingChangeResult {
    pub old_rating: i32,
    pub new_rating: i32,
    pub rating_change: i32,
    pub expected_result: f64,
    pub actual_result: f64,
    pub k_factor: f64,
    pub mexp: f64,
    pub mperf: f64,
}

/// One pairwise comparison inside a 1v1 session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub opponent_id: String,
    pub opponent_rating: i32,
    #[serde(flatten)]
    pub result: RatingChangeResult,
}

/// Final per-participant record of a resolved session.
///
/// In 1v1 sessions the numeric fields are averages over `matchups`; in
/// team sessions they come from the single update against the opposing team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantRating {
    pub user_id: String,
    pub old_rating: i32,
    pub new_rating: i32,
    pub rating_change: i32,
    pub expected_result: f64,
    pub actual_result: f64,
    pub k_factor: f64,
    pub mexp: f64,
    pub mperf: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matchups: Vec<Matchup>,
}

impl ParticipantRating {
    /// Record for a participant rated by exactly one update
    pub fn from_single(user_id: impl Into<String>, result: RatingChangeResult) -> Self {
        Self {
            user_id: user_id.into(),
            old_rating: result.old_rating,
            new_rating: result.new_rating,
            rating_change: result.rating_change,
            expected_result: result.expected_result,
            actual_result: result.actual_result,
            k_factor: result.k_factor,
            mexp: result.mexp,
            mperf: result.mperf,
            matchups: Vec::new(),
        }
    }
}
