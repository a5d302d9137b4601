//! Contest format and room mode

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{formats, room_modes};
use crate::rating::RatingError;

/// Scoring format of a rated session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestFormat {
    /// Solved count and penalty time, lower penalty wins
    Icpc,
    /// Partial scores, the time of the last improvement matters
    Ioi,
    /// Scores compared directly, no time component
    Long,
}

impl ContestFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Icpc => formats::ICPC,
            Self::Ioi => formats::IOI,
            Self::Long => formats::LONG,
        }
    }
}

impl FromStr for ContestFormat {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            formats::ICPC => Ok(Self::Icpc),
            formats::IOI => Ok(Self::Ioi),
            formats::LONG => Ok(Self::Long),
            _ => Err(RatingError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How participants are matched against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomMode {
    /// Independent participants ranked against each other
    #[serde(rename = "1v1")]
    OneVsOne,
    /// Host team against opponent team
    #[serde(rename = "team-vs-team")]
    TeamVsTeam,
}

impl RoomMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneVsOne => room_modes::ONE_VS_ONE,
            Self::TeamVsTeam => room_modes::TEAM_VS_TEAM,
        }
    }
}

impl FromStr for RoomMode {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            room_modes::ONE_VS_ONE => Ok(Self::OneVsOne),
            room_modes::TEAM_VS_TEAM => Ok(Self::TeamVsTeam),
            _ => Err(RatingError::UnknownRoomMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
