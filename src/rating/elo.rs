//! Elo core
//!
//! Expected result, experience multiplier, bounded K-factor and the single
//! rating update every resolver is built from.

use crate::constants::ELO_SCALE;
use crate::models::RatingChangeResult;

use super::RatingParams;

/// Probability that `player_rating` beats `opponent_rating`
pub fn expected_result(player_rating: f64, opponent_rating: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent_rating - player_rating) / ELO_SCALE))
}

/// Experience multiplier (Mexp) from the external reference rating.
///
/// Newer, lower-rated accounts move faster.
pub fn experience_multiplier(cf_rating: i32) -> f64 {
    match cf_rating {
        i32::MIN..800 => 1.7,
        800..1200 => 1.5,
        1200..1400 => 1.25,
        1400..1800 => 1.0,
        _ => 0.8,
    }
}

/// `k_base * mexp * mperf`, bounded to `[k_min, k_max]`
pub fn k_factor(params: &RatingParams, mexp: f64, mperf: f64) -> f64 {
    (params.k_base * mexp * mperf)
        .max(params.k_min)
        .min(params.k_max)
}

/// Rate one player against one reference rating.
///
/// `actual_result` is 1 for a win, 0.5 for a draw and 0 for a loss. `mperf`
/// comes from the performance modifier selector.
pub fn rating_change(
    params: &RatingParams,
    player_rating: i32,
    opponent_rating: f64,
    actual_result: f64,
    cf_rating: i32,
    mperf: f64,
) -> RatingChangeResult {
    let expected = expected_result(f64::from(player_rating), opponent_rating);
    let mexp = experience_multiplier(cf_rating);
    let k = k_factor(params, mexp, mperf);
    let new_rating = (f64::from(player_rating) + k * (actual_result - expected)).round() as i32;

    RatingChangeResult {
        old_rating: player_rating,
        new_rating,
        rating_change: new_rating - player_rating,
        expected_result: expected,
        actual_result,
        k_factor: k,
        mexp,
        mperf,
    }
}
