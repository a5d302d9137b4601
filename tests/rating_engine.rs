//! End-to-end properties of the rating engine's public API.

use duel_ratings::models::{
    ContestFormat, Participant, RoomMode, Submission, SubmissionStatus, TeamType,
};
use duel_ratings::rating::{
    self, MperfModel, RatingError, RatingParams, TeamPerformance, elo, performance,
};

fn accepted(problem: &str, seconds: f64) -> Submission {
    Submission::new(problem, SubmissionStatus::Accepted, seconds)
}

fn wrong(problem: &str, seconds: f64) -> Submission {
    Submission::new(problem, SubmissionStatus::WrongAnswer, seconds)
}

#[test]
fn k_factor_and_expectation_stay_in_bounds() {
    for model in [MperfModel::Step, MperfModel::Continuous] {
        let params = RatingParams {
            mperf_model: model,
            ..RatingParams::default()
        };

        for (rating, cf_rating, opponent) in [
            (0, 0, 4000),
            (4000, 4000, 0),
            (1200, 650, 1900),
            (2400, 2600, 2400),
        ] {
            let fast = Participant::new("fast", rating, cf_rating)
                .with_rank(1)
                .with_submissions(vec![accepted("A", 60.0)]);
            let slow = Participant::new("slow", opponent, 1500)
                .with_rank(2)
                .with_submissions(vec![wrong("A", 30.0), accepted("A", 6000.0)]);

            let results = rating::resolve_session(
                &params,
                ContestFormat::Icpc,
                RoomMode::OneVsOne,
                &[fast, slow],
            )
            .unwrap();
            for result in &results {
                assert!((10.0..=60.0).contains(&result.k_factor));
                assert!(result.expected_result > 0.0 && result.expected_result < 1.0);
            }
        }
    }
}

#[test]
fn icpc_penalty_example() {
    let submissions = vec![
        wrong("A", 300.0),
        accepted("A", 720.0),
        accepted("A", 1500.0),
    ];
    let perf = performance::icpc_performance(&submissions, 20.0);
    assert_eq!(perf.penalty, 32.0);
    assert_eq!(perf.problems_solved, 1);
}

#[test]
fn ioi_scored_time_example() {
    let submissions = vec![
        Submission::scored("A", SubmissionStatus::WrongAnswer, 40.0, 60.0),
        Submission::scored("A", SubmissionStatus::WrongAnswer, 70.0, 300.0),
    ];
    let perf = performance::ioi_performance(&submissions);
    assert_eq!(perf.total_score, 70.0);
    assert_eq!(perf.final_score_time, 5.0);
}

#[test]
fn icpc_team_draw() {
    let params = RatingParams::default();
    let participants = vec![
        Participant::new("h1", 1500, 1500)
            .with_team(TeamType::Host)
            .with_submissions(vec![accepted("A", 600.0), accepted("B", 1800.0)]),
        Participant::new("o1", 1450, 900)
            .with_team(TeamType::Opponent)
            .with_submissions(vec![wrong("A", 120.0), accepted("A", 600.0)]),
        Participant::new("o2", 1550, 2000)
            .with_team(TeamType::Opponent)
            .with_submissions(vec![accepted("B", 600.0)]),
    ];

    let host = TeamPerformance::aggregate(
        &params,
        ContestFormat::Icpc,
        TeamType::Host,
        &[&participants[0]],
    );
    let opponent = TeamPerformance::aggregate(
        &params,
        ContestFormat::Icpc,
        TeamType::Opponent,
        &[&participants[1], &participants[2]],
    );
    assert_eq!(host.penalty, opponent.penalty);
    assert_eq!(host.problems_solved, opponent.problems_solved);
    let outcome = rating::team::team_outcome(ContestFormat::Icpc, &host, &opponent);
    assert_eq!(outcome, 0.5);

    let results = rating::resolve_session(
        &params,
        ContestFormat::Icpc,
        RoomMode::TeamVsTeam,
        &participants,
    )
    .unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.actual_result == 0.5));
}

#[test]
fn single_opponent_is_not_reshaped_by_averaging() {
    let params = RatingParams::default();
    let a = Participant::new("a", 1730, 1250).with_rank(1);
    let b = Participant::new("b", 1910, 2100).with_rank(2);

    let results =
        rating::resolve_session(&params, ContestFormat::Long, RoomMode::OneVsOne, &[a, b]).unwrap();

    let core = elo::rating_change(&params, 1730, 1910.0, 1.0, 1250, 1.0);
    assert_eq!(results[0].new_rating, core.new_rating);
    assert_eq!(results[0].k_factor, core.k_factor);
}

#[test]
fn empty_opponent_team_fails_without_results() {
    let params = RatingParams::default();
    let host_only = vec![Participant::new("h1", 1500, 1500).with_team(TeamType::Host)];

    let err = rating::resolve_session(
        &params,
        ContestFormat::Ioi,
        RoomMode::TeamVsTeam,
        &host_only,
    )
    .unwrap_err();
    assert_eq!(err, RatingError::EmptyTeam(TeamType::Opponent));
    assert!(err.is_configuration());
}

#[test]
fn resolution_is_deterministic() {
    let params = RatingParams::default();
    let participants: Vec<Participant> = (0..6)
        .map(|i| {
            Participant::new(format!("p{}", i), 1200 + i * 97, 600 + i * 310)
                .with_rank(6 - i as u32)
                .with_submissions(vec![accepted("A", 100.0 * f64::from(i + 1))])
        })
        .collect();

    let resolve = || {
        rating::resolve_session(
            &params,
            ContestFormat::Icpc,
            RoomMode::OneVsOne,
            &participants,
        )
    };
    let first = resolve().unwrap();
    let second = resolve().unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].user_id, "p5");
    assert!(first.iter().all(|r| r.matchups.len() == 5));
}
