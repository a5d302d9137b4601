//! Rating request DTOs
//!
//! Both snake_case and camelCase field names are accepted here and
//! normalised into the engine's single schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_PARTICIPANTS, MAX_RATING, MAX_SUBMISSIONS_PER_PARTICIPANT, MIN_RATING};
use crate::models::{Participant, Submission, SubmissionStatus, TeamType};

/// Resolve a finished session
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ResolveSessionRequest {
    /// Contest format: icpc, ioi, long
    pub format: String,

    /// Room mode: 1v1, team-vs-team
    #[serde(alias = "roomMode")]
    pub room_mode: String,

    #[validate(length(max = MAX_PARTICIPANTS))]
    #[validate(nested)]
    pub participants: Vec<ParticipantRequest>,
}

/// Rate one player against one opponent
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct MatchupRequest {
    /// Contest format: icpc, ioi, long
    pub format: String,

    #[validate(nested)]
    pub player: ParticipantRequest,

    #[validate(nested)]
    pub opponent: ParticipantRequest,

    /// 1 for a win, 0.5 for a draw, 0 for a loss
    #[serde(alias = "actualResult")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub actual_result: f64,
}

/// Participant as sent by the session store
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ParticipantRequest {
    #[serde(alias = "userId")]
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,

    #[serde(alias = "currentRating")]
    #[validate(range(min = MIN_RATING, max = MAX_RATING))]
    pub current_rating: i32,

    #[serde(alias = "cfRating")]
    #[validate(range(min = MIN_RATING, max = MAX_RATING))]
    pub cf_rating: i32,

    /// 1v1 placement, lower is better
    #[validate(range(min = 1))]
    pub rank: Option<u32>,

    /// Team side: host, opponent
    #[serde(alias = "teamType")]
    pub team_type: Option<TeamType>,

    #[serde(default, alias = "finalScore")]
    #[validate(range(min = 0.0))]
    pub final_score: f64,

    #[serde(default)]
    #[validate(length(max = MAX_SUBMISSIONS_PER_PARTICIPANT))]
    #[validate(nested)]
    pub submissions: Vec<SubmissionRequest>,
}

/// Submission as sent by the session store
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SubmissionRequest {
    #[serde(alias = "problemId")]
    #[validate(length(min = 1, max = 64))]
    pub problem_id: String,

    pub status: SubmissionStatus,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub score: f64,

    /// Elapsed seconds since contest start
    #[serde(alias = "timeFromStartSeconds")]
    #[validate(range(min = 0.0))]
    pub time_from_start_seconds: f64,
}

impl From<SubmissionRequest> for Submission {
    fn from(req: SubmissionRequest) -> Self {
        Submission::scored(
            req.problem_id,
            req.status,
            req.score,
            req.time_from_start_seconds,
        )
    }
}

impl From<ParticipantRequest> for Participant {
    fn from(req: ParticipantRequest) -> Self {
        Participant {
            user_id: req.user_id,
            current_rating: req.current_rating,
            cf_rating: req.cf_rating,
            rank: req.rank,
            team_type: req.team_type,
            final_score: req.final_score,
            submissions: req.submissions.into_iter().map(Submission::from).collect(),
        }
    }
}
