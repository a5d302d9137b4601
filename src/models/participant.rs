//! Participant model

use serde::{Deserialize, Serialize};

use crate::constants::team_types;

use super::Submission;

/// One contestant entering the rating engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub user_id: String,
    /// Pre-contest rating
    pub current_rating: i32,
    /// External reference rating, only used to size the experience multiplier
    pub cf_rating: i32,
    /// Placement in 1v1 rooms, lower is better
    pub rank: Option<u32>,
    /// Side in team-vs-team rooms
    pub team_type: Option<TeamType>,
    pub final_score: f64,
    pub submissions: Vec<Submission>,
}

impl Participant {
    pub fn new(user_id: impl Into<String>, current_rating: i32, cf_rating: i32) -> Self {
        Self {
            user_id: user_id.into(),
            current_rating,
            cf_rating,
            rank: None,
            team_type: None,
            final_score: 0.0,
            submissions: Vec::new(),
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_team(mut self, team_type: TeamType) -> Self {
        self.team_type = Some(team_type);
        self
    }

    pub fn with_final_score(mut self, final_score: f64) -> Self {
        self.final_score = final_score;
        self
    }

    pub fn with_submissions(mut self, submissions: Vec<Submission>) -> Self {
        self.submissions = submissions;
        self
    }
}

/// Side of a team-vs-team room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamType {
    Host,
    Opponent,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => team_types::HOST,
            Self::Opponent => team_types::OPPONENT,
        }
    }

    /// The side facing this one
    pub fn opposite(&self) -> Self {
        match self {
            Self::Host => Self::Opponent,
            Self::Opponent => Self::Host,
        }
    }
}

impl std::fmt::Display for TeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
