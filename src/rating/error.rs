//! Rating engine errors

use thiserror::Error;

use crate::models::TeamType;

/// Errors raised while resolving a rated session.
///
/// The engine only checks the shape of its arguments; field domains
/// (rating ranges, score signs) are the caller's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// Format string outside icpc / ioi / long
    #[error("Unsupported contest format: {0}")]
    UnknownFormat(String),

    /// Room mode string outside 1v1 / team-vs-team
    #[error("Unsupported room mode: {0}")]
    UnknownRoomMode(String),

    /// Team-vs-team session with no members on one side
    #[error("Team '{0}' has no members")]
    EmptyTeam(TeamType),

    /// Ranked session with fewer than two participants
    #[error("At least 2 participants are required, got {0}")]
    TooFewParticipants(usize),

    /// 1v1 participant without a rank
    #[error("Participant '{0}' has no rank")]
    MissingRank(String),

    /// Team-vs-team participant without a side
    #[error("Participant '{0}' has no team type")]
    MissingTeamType(String),
}

impl RatingError {
    /// Whether the error reflects a misconfigured session rather than bad field data
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownFormat(_) | Self::UnknownRoomMode(_) | Self::EmptyTeam(_)
        )
    }
}
