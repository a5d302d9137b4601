//! Rating service

use std::collections::BTreeMap;

use anyhow::Context;
use chrono::Utc;
use tracing::{debug, info};

use crate::{
    constants::{formats, room_modes},
    error::{AppError, AppErrorWithDetails, AppResult},
    handlers::ratings::{
        request::{MatchupRequest, ResolveSessionRequest},
        response::{MatchupResponse, SessionRatingsResponse, SessionSummary},
    },
    models::{ContestFormat, Participant, RoomMode},
    rating::{self, PerformanceSignal, RatingError, RatingParams},
};

/// Rating service for business logic
pub struct RatingService;

impl RatingService {
    /// Resolve every participant's new rating for a finished session
    pub async fn resolve_session(
        params: RatingParams,
        payload: ResolveSessionRequest,
    ) -> Result<SessionRatingsResponse, AppErrorWithDetails> {
        let format: ContestFormat = payload.format.parse().map_err(|e: RatingError| {
            AppError::from(e).with_details(serde_json::json!({ "supported": formats::ALL }))
        })?;
        let mode: RoomMode = payload.room_mode.parse().map_err(|e: RatingError| {
            AppError::from(e).with_details(serde_json::json!({ "supported": room_modes::ALL }))
        })?;

        let participants: Vec<Participant> = payload
            .participants
            .into_iter()
            .map(Participant::from)
            .collect();

        if mode == RoomMode::OneVsOne {
            Self::ensure_unique_ranks(&participants)?;
        }

        debug!(
            format = %format,
            room_mode = %mode,
            participants = participants.len(),
            "Resolving session ratings"
        );

        // Pairwise resolution is quadratic in the participant count
        let results = tokio::task::spawn_blocking(move || {
            rating::resolve_session(&params, format, mode, &participants)
        })
        .await
        .context("Rating task failed")
        .map_err(AppError::from)?
        .map_err(AppError::from)?;

        let summary = SessionSummary::from_results(&results);

        info!(
            format = %format,
            room_mode = %mode,
            participants = summary.participants,
            average_change = summary.average_change,
            max_gain = summary.max_gain,
            max_loss = summary.max_loss,
            "Session ratings resolved"
        );

        Ok(SessionRatingsResponse {
            format,
            room_mode: mode,
            results,
            summary,
            computed_at: Utc::now(),
        })
    }

    /// Rate one player against one opponent
    pub fn rate_matchup(
        params: &RatingParams,
        payload: MatchupRequest,
    ) -> AppResult<MatchupResponse> {
        let format: ContestFormat = payload.format.parse()?;

        if ![0.0, 0.5, 1.0].contains(&payload.actual_result) {
            return Err(AppError::Validation(
                "actual_result must be 0, 0.5 or 1".to_string(),
            ));
        }

        let player = Participant::from(payload.player);
        let opponent = Participant::from(payload.opponent);

        let actual_result = payload.actual_result;
        let result = rating::rate_matchup(params, format, &player, &opponent, actual_result);

        info!(
            format = %format,
            player = %player.user_id,
            opponent = %opponent.user_id,
            rating_change = result.rating_change,
            k_factor = result.k_factor,
            "Matchup rated"
        );

        Ok(MatchupResponse {
            format,
            player_performance: PerformanceSignal::from_submissions(
                params,
                format,
                &player.submissions,
            ),
            opponent_performance: PerformanceSignal::from_submissions(
                params,
                format,
                &opponent.submissions,
            ),
            player_id: player.user_id,
            opponent_id: opponent.user_id,
            result,
            computed_at: Utc::now(),
        })
    }

    /// 1v1 ranks must be unique; the engine would otherwise order ties by input position
    fn ensure_unique_ranks(participants: &[Participant]) -> Result<(), AppErrorWithDetails> {
        let mut by_rank: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
        for participant in participants {
            if let Some(rank) = participant.rank {
                by_rank.entry(rank).or_default().push(&participant.user_id);
            }
        }

        let duplicates: BTreeMap<u32, Vec<&str>> = by_rank
            .into_iter()
            .filter(|(_, users)| users.len() > 1)
            .collect();

        if duplicates.is_empty() {
            return Ok(());
        }

        Err(AppError::Validation("Ranks must be unique in 1v1 rooms".to_string())
            .with_details(serde_json::json!({ "duplicate_ranks": duplicates })))
    }
}
