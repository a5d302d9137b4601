//! Team aggregator for team-vs-team rooms
//!
//! Each side is merged into one [`TeamPerformance`], the sides are compared
//! once, and every member is then rated against the opposing team's average
//! rating with the team-level result.

use serde::Serialize;
use tracing::debug;

use crate::models::{ContestFormat, Participant, ParticipantRating, TeamType};
use crate::utils::time::format_minutes;

use super::{PerformanceSignal, RatingError, RatingParams, elo, modifier};

/// Merged standing of one team, alive only for one aggregation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPerformance {
    pub team_type: TeamType,
    pub members: usize,
    /// ICPC: summed member penalty in minutes
    pub penalty: f64,
    /// IOI / long: summed member final score
    pub score: f64,
    /// IOI: latest member final-scored-time in minutes
    pub final_time: f64,
    pub problems_solved: u32,
    pub avg_rating: f64,
}

impl TeamPerformance {
    /// Aggregate the members of one side
    pub fn aggregate(
        params: &RatingParams,
        format: ContestFormat,
        team_type: TeamType,
        members: &[&Participant],
    ) -> Self {
        let avg_rating = if members.is_empty() {
            0.0
        } else {
            members
                .iter()
                .map(|m| f64::from(m.current_rating))
                .sum::<f64>()
                / members.len() as f64
        };

        let empty = Self {
            team_type,
            members: members.len(),
            penalty: 0.0,
            score: 0.0,
            final_time: 0.0,
            problems_solved: 0,
            avg_rating,
        };

        members.iter().fold(empty, |team, member| {
            match PerformanceSignal::from_submissions(params, format, &member.submissions) {
                PerformanceSignal::Icpc(icpc) => Self {
                    penalty: team.penalty + icpc.penalty,
                    problems_solved: team.problems_solved + icpc.problems_solved,
                    ..team
                },
                PerformanceSignal::Ioi(ioi) => Self {
                    score: team.score + member.final_score,
                    final_time: team.final_time.max(ioi.final_score_time),
                    ..team
                },
                PerformanceSignal::Long => Self {
                    score: team.score + member.final_score,
                    ..team
                },
            }
        })
    }

    /// Mean penalty per member, the ICPC reference a single member is compared with
    pub fn penalty_per_member(&self) -> f64 {
        if self.members == 0 {
            0.0
        } else {
            self.penalty / self.members as f64
        }
    }

    /// Cost a member's own signal is compared with when Mperf is selected
    fn reference_cost(&self, format: ContestFormat) -> f64 {
        match format {
            ContestFormat::Icpc => self.penalty_per_member(),
            ContestFormat::Ioi => self.final_time,
            ContestFormat::Long => 0.0,
        }
    }
}

/// Host result: 1 for a host win, 0.5 for a draw, 0 for a host loss
pub fn team_outcome(
    format: ContestFormat,
    host: &TeamPerformance,
    opponent: &TeamPerformance,
) -> f64 {
    match format {
        ContestFormat::Icpc => {
            if host.penalty < opponent.penalty {
                1.0
            } else if host.penalty > opponent.penalty {
                0.0
            } else if host.problems_solved > opponent.problems_solved {
                1.0
            } else if host.problems_solved < opponent.problems_solved {
                0.0
            } else {
                0.5
            }
        }
        ContestFormat::Ioi | ContestFormat::Long => {
            if host.score > opponent.score {
                1.0
            } else if host.score < opponent.score {
                0.0
            } else {
                0.5
            }
        }
    }
}

/// Resolve a team-vs-team session.
///
/// Records come back host members first, each side in input order. Both
/// teams must be non-empty.
pub fn resolve_teams(
    params: &RatingParams,
    format: ContestFormat,
    participants: &[Participant],
) -> Result<Vec<ParticipantRating>, RatingError> {
    let mut host = Vec::new();
    let mut opponent = Vec::new();
    for participant in participants {
        match participant.team_type {
            Some(TeamType::Host) => host.push(participant),
            Some(TeamType::Opponent) => opponent.push(participant),
            None => return Err(RatingError::MissingTeamType(participant.user_id.clone())),
        }
    }

    if host.is_empty() {
        return Err(RatingError::EmptyTeam(TeamType::Host));
    }
    if opponent.is_empty() {
        return Err(RatingError::EmptyTeam(TeamType::Opponent));
    }

    let host_perf = TeamPerformance::aggregate(params, format, TeamType::Host, &host);
    let opponent_perf = TeamPerformance::aggregate(params, format, TeamType::Opponent, &opponent);
    let host_result = team_outcome(format, &host_perf, &opponent_perf);

    for team in [&host_perf, &opponent_perf] {
        debug!(
            team = %team.team_type,
            against = %team.team_type.opposite(),
            members = team.members,
            penalty = %format_minutes(team.penalty),
            score = team.score,
            final_time = %format_minutes(team.final_time),
            problems_solved = team.problems_solved,
            avg_rating = team.avg_rating,
            "Aggregated team performance"
        );
    }

    let rate_side = |members: &[&Participant], result: f64, against: &TeamPerformance| {
        members
            .iter()
            .map(|member| {
                let own = PerformanceSignal::from_submissions(params, format, &member.submissions);
                let mperf = modifier::multiplier_for_costs(
                    params.mperf_model,
                    result >= 1.0,
                    &own,
                    against.reference_cost(format),
                );
                let update = elo::rating_change(
                    params,
                    member.current_rating,
                    against.avg_rating,
                    result,
                    member.cf_rating,
                    mperf,
                );
                ParticipantRating::from_single(member.user_id.clone(), update)
            })
            .collect::<Vec<_>>()
    };

    let opponent_result = 1.0 - host_result;
    let mut results = rate_side(host.as_slice(), host_result, &opponent_perf);
    results.extend(rate_side(opponent.as_slice(), opponent_result, &host_perf));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Submission,
        SubmissionStatus::{Accepted, WrongAnswer},
    };

    fn member(id: &str, rating: i32, team: TeamType) -> Participant {
        Participant::new(id, rating, 1500).with_team(team)
    }

    #[test]
    fn test_icpc_team_draw() {
        let params = RatingParams::default();
        let solve = |t: f64| vec![Submission::new("A", Accepted, t)];
        let participants = vec![
            member("h1", 1500, TeamType::Host).with_submissions(solve(600.0)),
            member("h2", 1400, TeamType::Host).with_submissions(solve(1200.0)),
            member("o1", 1600, TeamType::Opponent).with_submissions(solve(900.0)),
            member("o2", 1300, TeamType::Opponent).with_submissions(solve(900.0)),
        ];

        let results = resolve_teams(&params, ContestFormat::Icpc, &participants).unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.actual_result == 0.5));
        assert!(results.iter().all(|r| r.mperf == 1.0));
    }

    #[test]
    fn test_icpc_lower_penalty_wins() {
        let params = RatingParams::default();
        let participants = vec![
            member("h1", 1500, TeamType::Host)
                .with_submissions(vec![Submission::new("A", Accepted, 600.0)]),
            member("o1", 1500, TeamType::Opponent).with_submissions(vec![
                Submission::new("A", WrongAnswer, 300.0),
                Submission::new("A", Accepted, 600.0),
            ]),
        ];

        let results = resolve_teams(&params, ContestFormat::Icpc, &participants).unwrap();
        assert_eq!(results[0].user_id, "h1");
        assert_eq!(results[0].actual_result, 1.0);
        assert_eq!(results[1].actual_result, 0.0);
        // 10 / 30 minutes is a decisive win
        assert_eq!(results[0].mperf, 1.25);
        assert_eq!(results[1].mperf, 1.0);
    }

    #[test]
    fn test_icpc_penalty_tie_broken_by_solved_count() {
        let host = TeamPerformance {
            team_type: TeamType::Host,
            members: 1,
            penalty: 60.0,
            score: 0.0,
            final_time: 0.0,
            problems_solved: 3,
            avg_rating: 1500.0,
        };
        let opponent = TeamPerformance {
            team_type: TeamType::Opponent,
            problems_solved: 2,
            ..host.clone()
        };
        assert_eq!(team_outcome(ContestFormat::Icpc, &host, &opponent), 1.0);
        assert_eq!(team_outcome(ContestFormat::Icpc, &opponent, &host), 0.0);
    }

    #[test]
    fn test_ioi_team_score_and_finish_time() {
        let params = RatingParams::default();
        let a = member("a", 1500, TeamType::Host)
            .with_final_score(70.0)
            .with_submissions(vec![Submission::scored("A", Accepted, 70.0, 600.0)]);
        let b = member("b", 1700, TeamType::Host)
            .with_final_score(30.0)
            .with_submissions(vec![Submission::scored("B", Accepted, 30.0, 1800.0)]);

        let team =
            TeamPerformance::aggregate(&params, ContestFormat::Ioi, TeamType::Host, &[&a, &b]);
        assert_eq!(team.score, 100.0);
        assert_eq!(team.final_time, 30.0);
        assert_eq!(team.avg_rating, 1600.0);
        assert_eq!(team.members, 2);
    }

    #[test]
    fn test_members_rated_against_opposing_average() {
        let params = RatingParams::default();
        let participants = vec![
            member("h1", 1400, TeamType::Host).with_final_score(300.0),
            member("h2", 1800, TeamType::Host).with_final_score(100.0),
            member("o1", 1500, TeamType::Opponent).with_final_score(200.0),
            member("o2", 1700, TeamType::Opponent).with_final_score(100.0),
        ];

        let results = resolve_teams(&params, ContestFormat::Long, &participants).unwrap();

        let expected_h1 = elo::rating_change(&params, 1400, 1600.0, 1.0, 1500, 1.0);
        let expected_o2 = elo::rating_change(&params, 1700, 1600.0, 0.0, 1500, 1.0);
        assert_eq!(results[0].new_rating, expected_h1.new_rating);
        assert_eq!(results[3].new_rating, expected_o2.new_rating);
        assert_ne!(results[0].rating_change, results[1].rating_change);
        assert!(results[..2].iter().all(|r| r.actual_result == 1.0));
        assert!(results[2..].iter().all(|r| r.actual_result == 0.0));
    }

    fn ioi_member(id: &str, team: TeamType, score: f64, improved_at: f64) -> Participant {
        member(id, 1500, team)
            .with_final_score(score)
            .with_submissions(vec![Submission::scored("A", Accepted, score, improved_at)])
    }

    #[test]
    fn test_ioi_team_winner_compared_with_opposing_finish_time() {
        let params = RatingParams::default();
        let participants = vec![
            ioi_member("h1", TeamType::Host, 100.0, 600.0),
            ioi_member("o1", TeamType::Opponent, 50.0, 3000.0),
        ];

        let results = resolve_teams(&params, ContestFormat::Ioi, &participants).unwrap();

        // 10 / 50 minutes
        assert_eq!(results[0].actual_result, 1.0);
        assert_eq!(results[0].mperf, 1.25);
        assert_eq!(results[0].rating_change, 20);
        assert_eq!(results[1].actual_result, 0.0);
        assert_eq!(results[1].mperf, 1.0);
        assert_eq!(results[1].rating_change, -16);
    }

    #[test]
    fn test_ioi_late_finishing_winner_is_damped() {
        let params = RatingParams::default();
        let participants = vec![
            ioi_member("h1", TeamType::Host, 100.0, 3000.0),
            ioi_member("o1", TeamType::Opponent, 50.0, 600.0),
        ];

        let results = resolve_teams(&params, ContestFormat::Ioi, &participants).unwrap();
        assert_eq!(results[0].mperf, 0.8);
        assert_eq!(results[0].k_factor, 25.6);
        assert_eq!(results[0].rating_change, 13);
        assert_eq!(results[1].mperf, 1.0);
    }

    #[test]
    fn test_ioi_team_score_tie_is_draw() {
        let params = RatingParams::default();
        let participants = vec![
            ioi_member("h1", TeamType::Host, 40.0, 600.0),
            ioi_member("h2", TeamType::Host, 20.0, 900.0),
            ioi_member("o1", TeamType::Opponent, 60.0, 1200.0),
        ];

        let results = resolve_teams(&params, ContestFormat::Ioi, &participants).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.actual_result == 0.5));
        assert!(results.iter().all(|r| r.mperf == 1.0));
        assert!(results.iter().all(|r| r.rating_change == 0));
    }

    #[test]
    fn test_empty_team_is_configuration_error() {
        let params = RatingParams::default();
        let participants = vec![
            member("h1", 1500, TeamType::Host),
            member("h2", 1500, TeamType::Host),
        ];

        let err = resolve_teams(&params, ContestFormat::Icpc, &participants).unwrap_err();
        assert_eq!(err, RatingError::EmptyTeam(TeamType::Opponent));
        assert!(err.is_configuration());

        let err = resolve_teams(&params, ContestFormat::Icpc, &[]).unwrap_err();
        assert_eq!(err, RatingError::EmptyTeam(TeamType::Host));
    }
}
