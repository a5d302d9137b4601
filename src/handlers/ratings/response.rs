//! Rating response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ContestFormat, ParticipantRating, RatingChangeResult, RoomMode};
use crate::rating::PerformanceSignal;

/// Resolved session
#[derive(Debug, Serialize)]
pub struct SessionRatingsResponse {
    pub format: ContestFormat,
    pub room_mode: RoomMode,
    pub results: Vec<ParticipantRating>,
    pub summary: SessionSummary,
    pub computed_at: DateTime<Utc>,
}

/// Aggregate view of a resolved session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub participants: usize,
    pub average_change: f64,
    /// Largest increase, 0 if nobody gained
    pub max_gain: i32,
    /// Largest decrease, 0 if nobody lost
    pub max_loss: i32,
}

impl SessionSummary {
    pub fn from_results(results: &[ParticipantRating]) -> Self {
        let participants = results.len();
        let changes = || results.iter().map(|r| r.rating_change);
        let total: i64 = changes().map(i64::from).sum();

        Self {
            participants,
            average_change: if participants == 0 {
                0.0
            } else {
                total as f64 / participants as f64
            },
            max_gain: changes().max().unwrap_or(0).max(0),
            max_loss: changes().min().unwrap_or(0).min(0),
        }
    }
}

/// Single comparison result
#[derive(Debug, Serialize)]
pub struct MatchupResponse {
    pub format: ContestFormat,
    pub player_id: String,
    pub opponent_id: String,
    #[serde(flatten)]
    pub result: RatingChangeResult,
    pub player_performance: PerformanceSignal,
    pub opponent_performance: PerformanceSignal,
    pub computed_at: DateTime<Utc>,
}
