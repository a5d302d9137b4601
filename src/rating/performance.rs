//! Format performance modules
//!
//! Each format turns a participant's raw submissions into one comparable
//! signal. For ICPC that is the total penalty time, for IOI the elapsed time
//! of the last score-improving submission. Long contests carry no signal.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{ContestFormat, Submission};
use crate::utils::time::seconds_to_minutes;

use super::RatingParams;

/// ICPC standing of one participant
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IcpcPerformance {
    /// Sum of solve times plus wrong-attempt penalties, in minutes
    pub penalty: f64,
    pub problems_solved: u32,
}

/// IOI standing of one participant
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IoiPerformance {
    pub total_score: f64,
    /// Minutes from start to the last submission that raised the score
    pub final_score_time: f64,
}

/// Comparative signal fed into the performance modifier selector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum PerformanceSignal {
    Icpc(IcpcPerformance),
    Ioi(IoiPerformance),
    Long,
}

impl PerformanceSignal {
    /// Derive the signal for `format` from a submission set
    pub fn from_submissions(
        params: &RatingParams,
        format: ContestFormat,
        submissions: &[Submission],
    ) -> Self {
        match format {
            ContestFormat::Icpc => {
                let penalty_per_wrong = params.penalty_per_wrong_minutes;
                Self::Icpc(icpc_performance(submissions, penalty_per_wrong))
            }
            ContestFormat::Ioi => Self::Ioi(ioi_performance(submissions)),
            ContestFormat::Long => Self::Long,
        }
    }

    /// The cost compared between two sides, lower is better
    pub fn cost(&self) -> Option<f64> {
        match self {
            Self::Icpc(icpc) => Some(icpc.penalty),
            Self::Ioi(ioi) => Some(ioi.final_score_time),
            Self::Long => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ProblemAttempts {
    wrong_attempts: u32,
    solved_at_minutes: Option<f64>,
}

/// Submissions ordered by elapsed time; equal times keep their input order
fn chronological(submissions: &[Submission]) -> Vec<&Submission> {
    let mut ordered: Vec<&Submission> = submissions.iter().collect();
    ordered.sort_by(|a, b| f64::total_cmp(&a.time_from_start_seconds, &b.time_from_start_seconds));
    ordered
}

/// ICPC penalty time and solved count.
///
/// Only the first accepted submission of a problem counts. Rejected attempts
/// before it cost `penalty_per_wrong` minutes each; anything after it is
/// ignored. Unsolved problems cost nothing.
pub fn icpc_performance(submissions: &[Submission], penalty_per_wrong: f64) -> IcpcPerformance {
    let attempts = chronological(submissions).into_iter().fold(
        BTreeMap::<&str, ProblemAttempts>::new(),
        |mut acc, submission| {
            let problem = acc.entry(submission.problem_id.as_str()).or_default();
            if problem.solved_at_minutes.is_none() {
                if submission.status.is_accepted() {
                    problem.solved_at_minutes =
                        Some(seconds_to_minutes(submission.time_from_start_seconds));
                } else {
                    problem.wrong_attempts += 1;
                }
            }
            acc
        },
    );

    attempts
        .values()
        .filter_map(|problem| {
            problem
                .solved_at_minutes
                .map(|solved_at| solved_at + f64::from(problem.wrong_attempts) * penalty_per_wrong)
        })
        .fold(IcpcPerformance::default(), |acc, cost| IcpcPerformance {
            penalty: acc.penalty + cost,
            problems_solved: acc.problems_solved + 1,
        })
}

/// IOI total score and final-scored-time.
///
/// Walks submissions in time order keeping the best score per problem. Each
/// improvement adds its delta to the total and moves the time marker, so the
/// result answers "how much, and how late the final improvement landed".
pub fn ioi_performance(submissions: &[Submission]) -> IoiPerformance {
    let (_, performance) = chronological(submissions).into_iter().fold(
        (HashMap::<&str, f64>::new(), IoiPerformance::default()),
        |(mut best, performance), submission| {
            let problem = submission.problem_id.as_str();
            let previous = best.get(problem).copied().unwrap_or(0.0);
            if submission.score > previous {
                best.insert(problem, submission.score);
                let improved = IoiPerformance {
                    total_score: performance.total_score + (submission.score - previous),
                    final_score_time: seconds_to_minutes(submission.time_from_start_seconds),
                };
                (best, improved)
            } else {
                (best, performance)
            }
        },
    );

    performance
}
