//! Pairwise resolver for 1v1 rooms
//!
//! Every better-ranked participant beats every worse-ranked one. Each
//! participant collects one update per opponent and the final change is the
//! rounded mean of those updates, so multi-way sessions do not produce
//! outsized swings.

use tracing::debug;

use crate::constants::MIN_PARTICIPANTS;
use crate::models::{ContestFormat, Matchup, Participant, ParticipantRating, RatingChangeResult};

use super::{PerformanceSignal, RatingError, RatingParams, elo, modifier};

/// Resolve a ranked session.
///
/// Records come back in rank order. Participants sharing a rank keep their
/// input order, so the one listed first is treated as the better placement.
pub fn resolve_pairwise(
    params: &RatingParams,
    format: ContestFormat,
    participants: &[Participant],
) -> Result<Vec<ParticipantRating>, RatingError> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(RatingError::TooFewParticipants(participants.len()));
    }

    let mut ranked = participants
        .iter()
        .map(|p| {
            p.rank
                .map(|rank| (rank, p))
                .ok_or_else(|| RatingError::MissingRank(p.user_id.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    ranked.sort_by_key(|(rank, _)| *rank);

    let ranked: Vec<&Participant> = ranked.into_iter().map(|(_, p)| p).collect();
    let signals: Vec<PerformanceSignal> = ranked
        .iter()
        .map(|p| PerformanceSignal::from_submissions(params, format, &p.submissions))
        .collect();

    let mut matchups: Vec<Vec<Matchup>> = vec![Vec::new(); ranked.len()];

    for winner in 0..ranked.len() {
        for loser in (winner + 1)..ranked.len() {
            let (w, l) = (ranked[winner], ranked[loser]);

            let win_mperf = modifier::performance_multiplier(
                params.mperf_model,
                true,
                &signals[winner],
                &signals[loser],
            );
            let win = elo::rating_change(
                params,
                w.current_rating,
                f64::from(l.current_rating),
                1.0,
                w.cf_rating,
                win_mperf,
            );

            let loss_mperf = modifier::performance_multiplier(
                params.mperf_model,
                false,
                &signals[loser],
                &signals[winner],
            );
            let loss = elo::rating_change(
                params,
                l.current_rating,
                f64::from(w.current_rating),
                0.0,
                l.cf_rating,
                loss_mperf,
            );

            debug!(
                winner = %w.user_id,
                loser = %l.user_id,
                winner_change = win.rating_change,
                loser_change = loss.rating_change,
                mperf = win.mperf,
                "Resolved pairwise comparison"
            );

            matchups[winner].push(Matchup {
                opponent_id: l.user_id.clone(),
                opponent_rating: l.current_rating,
                result: win,
            });
            matchups[loser].push(Matchup {
                opponent_id: w.user_id.clone(),
                opponent_rating: w.current_rating,
                result: loss,
            });
        }
    }

    Ok(ranked
        .into_iter()
        .zip(matchups)
        .map(|(participant, matchups)| average(participant, matchups))
        .collect())
}

/// Collapse per-opponent updates into one record
fn average(participant: &Participant, matchups: Vec<Matchup>) -> ParticipantRating {
    let count = matchups.len().max(1) as f64;
    let mean = |field: fn(&RatingChangeResult) -> f64| {
        matchups.iter().map(|m| field(&m.result)).sum::<f64>() / count
    };

    let rating_change = mean(|r| f64::from(r.rating_change)).round() as i32;
    let old_rating = participant.current_rating;

    ParticipantRating {
        user_id: participant.user_id.clone(),
        old_rating,
        new_rating: old_rating + rating_change,
        rating_change,
        expected_result: mean(|r| r.expected_result),
        actual_result: mean(|r| r.actual_result),
        k_factor: mean(|r| r.k_factor),
        mexp: elo::experience_multiplier(participant.cf_rating),
        mperf: mean(|r| r.mperf),
        matchups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Submission, SubmissionStatus::Accepted};

    fn player(id: &str, rating: i32, rank: u32) -> Participant {
        Participant::new(id, rating, 1500).with_rank(rank)
    }

    #[test]
    fn test_single_opponent_matches_core_update() {
        let params = RatingParams::default();
        let a = player("a", 1620, 1);
        let b = player("b", 1480, 2);

        let results =
            resolve_pairwise(&params, ContestFormat::Long, &[b.clone(), a.clone()]).unwrap();
        assert_eq!(results[0].user_id, "a");
        assert_eq!(results[1].user_id, "b");

        let direct_win = elo::rating_change(&params, 1620, 1480.0, 1.0, 1500, 1.0);
        let direct_loss = elo::rating_change(&params, 1480, 1620.0, 0.0, 1500, 1.0);
        assert_eq!(results[0].new_rating, direct_win.new_rating);
        assert_eq!(results[0].rating_change, direct_win.rating_change);
        assert_eq!(results[0].expected_result, direct_win.expected_result);
        assert_eq!(results[1].new_rating, direct_loss.new_rating);
        assert_eq!(results[0].matchups.len(), 1);
    }

    #[test]
    fn test_equal_players_split_expectation() {
        let params = RatingParams::default();
        let participants = [player("a", 1500, 1), player("b", 1500, 2)];
        let results = resolve_pairwise(&params, ContestFormat::Long, &participants).unwrap();

        assert!(results.iter().all(|r| r.expected_result == 0.5));
        assert_eq!(results[0].rating_change, 16);
        assert_eq!(results[1].rating_change, -16);
    }

    #[test]
    fn test_three_way_session_averages() {
        let params = RatingParams::default();
        let participants = vec![
            player("first", 1500, 1),
            player("second", 1500, 2),
            player("third", 1500, 3),
        ];

        let results = resolve_pairwise(&params, ContestFormat::Long, &participants).unwrap();

        // first: +16, +16 -> +16; second: -16, +16 -> 0; third: -16, -16 -> -16
        assert_eq!(
            results.iter().map(|r| r.rating_change).collect::<Vec<_>>(),
            vec![16, 0, -16]
        );
        assert_eq!(results[1].actual_result, 0.5);
        assert!(results.iter().all(|r| r.matchups.len() == 2));
        for r in &results {
            assert_eq!(r.new_rating, r.old_rating + r.rating_change);
        }
    }

    #[test]
    fn test_only_winner_gets_performance_bonus() {
        let params = RatingParams::default();
        let quick = player("quick", 1500, 1)
            .with_submissions(vec![Submission::new("A", Accepted, 300.0)]);
        let late = player("late", 1500, 2)
            .with_submissions(vec![Submission::new("A", Accepted, 3000.0)]);

        let results = resolve_pairwise(&params, ContestFormat::Icpc, &[quick, late]).unwrap();
        assert_eq!(results[0].mperf, 1.25);
        assert_eq!(results[1].mperf, 1.0);
        assert_eq!(results[0].rating_change, 20);
        assert_eq!(results[1].rating_change, -16);
    }

    #[test]
    fn test_tied_ranks_keep_input_order() {
        let params = RatingParams::default();
        let participants = [player("x", 1500, 1), player("y", 1500, 1)];
        let results = resolve_pairwise(&params, ContestFormat::Long, &participants).unwrap();
        assert_eq!(results[0].user_id, "x");
        assert_eq!(results[0].actual_result, 1.0);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let params = RatingParams::default();
        assert_eq!(
            resolve_pairwise(&params, ContestFormat::Icpc, &[player("solo", 1500, 1)]).unwrap_err(),
            RatingError::TooFewParticipants(1)
        );

        let participants = [player("a", 1500, 1), Participant::new("nobody", 1500, 1500)];
        assert_eq!(
            resolve_pairwise(&params, ContestFormat::Icpc, &participants).unwrap_err(),
            RatingError::MissingRank("nobody".to_string())
        );
    }
}
