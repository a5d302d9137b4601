//! Rating handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::{AppError, AppErrorWithDetails, AppResult},
    services::RatingService,
    state::AppState,
};

use super::{
    request::{MatchupRequest, ResolveSessionRequest},
    response::{MatchupResponse, SessionRatingsResponse},
};

/// Resolve rating changes for a finished session
pub async fn resolve_session(
    State(state): State<AppState>,
    Json(payload): Json<ResolveSessionRequest>,
) -> Result<Json<SessionRatingsResponse>, AppErrorWithDetails> {
    payload.validate().map_err(AppError::from)?;

    let response = RatingService::resolve_session(*state.params(), payload).await?;

    Ok(Json(response))
}

/// Rate a single player against a single opponent
pub async fn rate_matchup(
    State(state): State<AppState>,
    Json(payload): Json<MatchupRequest>,
) -> AppResult<Json<MatchupResponse>> {
    payload.validate()?;

    let response = RatingService::rate_matchup(state.params(), payload)?;

    Ok(Json(response))
}
