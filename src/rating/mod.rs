//! Rating adjustment engine
//!
//! Given the outcome of a contest session, produces updated ratings for every
//! participant. The engine is a set of pure functions over [`RatingParams`]:
//! it performs no I/O and holds no state, so sessions can be resolved
//! concurrently without coordination.
//!
//! Data flows bottom-up:
//! - [`performance`] derives a comparative signal per format
//! - [`modifier`] turns a signal pair and the outcome into Mperf
//! - [`elo`] applies the bounded Elo update
//! - [`pairwise`] and [`team`] orchestrate the core across participants

pub mod elo;
mod error;
pub mod modifier;
pub mod pairwise;
pub mod performance;
pub mod team;

pub use error::RatingError;
pub use modifier::MperfModel;
pub use pairwise::resolve_pairwise;
pub use performance::{IcpcPerformance, IoiPerformance, PerformanceSignal};
pub use team::{TeamPerformance, resolve_teams};

use crate::constants::{DEFAULT_K_BASE, DEFAULT_K_MAX, DEFAULT_K_MIN, ICPC_PENALTY_MINUTES};
use crate::models::{ContestFormat, Participant, ParticipantRating, RatingChangeResult, RoomMode};

/// Engine constants, passed explicitly to every computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingParams {
    pub k_base: f64,
    /// Minutes added per rejected attempt on a solved ICPC problem
    pub penalty_per_wrong_minutes: f64,
    pub k_min: f64,
    pub k_max: f64,
    pub mperf_model: MperfModel,
}

impl Default for RatingParams {
    fn default() -> Self {
        Self {
            k_base: DEFAULT_K_BASE,
            penalty_per_wrong_minutes: ICPC_PENALTY_MINUTES,
            k_min: DEFAULT_K_MIN,
            k_max: DEFAULT_K_MAX,
            mperf_model: MperfModel::Step,
        }
    }
}

/// Rate `player` against `opponent` in a single comparison.
///
/// Both submission sets feed the format module; only the player's Mperf is
/// computed, and only a win (`actual_result == 1`) can move it off 1.0.
pub fn rate_matchup(
    params: &RatingParams,
    format: ContestFormat,
    player: &Participant,
    opponent: &Participant,
    actual_result: f64,
) -> RatingChangeResult {
    let own = PerformanceSignal::from_submissions(params, format, &player.submissions);
    let theirs = PerformanceSignal::from_submissions(params, format, &opponent.submissions);
    let mperf =
        modifier::performance_multiplier(params.mperf_model, actual_result >= 1.0, &own, &theirs);

    elo::rating_change(
        params,
        player.current_rating,
        f64::from(opponent.current_rating),
        actual_result,
        player.cf_rating,
        mperf,
    )
}

/// Resolve a whole session, one record per participant
pub fn resolve_session(
    params: &RatingParams,
    format: ContestFormat,
    mode: RoomMode,
    participants: &[Participant],
) -> Result<Vec<ParticipantRating>, RatingError> {
    match mode {
        RoomMode::OneVsOne => resolve_pairwise(params, format, participants),
        RoomMode::TeamVsTeam => resolve_teams(params, format, participants),
    }
}
