//! Submission model

use serde::{Deserialize, Serialize};

/// One attempt at one problem by one participant.
///
/// `time_from_start_seconds` is resolved by the caller relative to the
/// contest start and is trusted as the only time source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub problem_id: String,
    pub status: SubmissionStatus,
    /// Points awarded (IOI and long formats only)
    #[serde(default)]
    pub score: f64,
    pub time_from_start_seconds: f64,
}

impl Submission {
    /// Create a submission without a score
    pub fn new(
        problem_id: impl Into<String>,
        status: SubmissionStatus,
        time_from_start_seconds: f64,
    ) -> Self {
        Self {
            problem_id: problem_id.into(),
            status,
            score: 0.0,
            time_from_start_seconds,
        }
    }

    /// Create a scored submission (IOI and long formats)
    pub fn scored(
        problem_id: impl Into<String>,
        status: SubmissionStatus,
        score: f64,
        time_from_start_seconds: f64,
    ) -> Self {
        Self {
            problem_id: problem_id.into(),
            status,
            score,
            time_from_start_seconds,
        }
    }
}

/// Submission verdict as seen by the rating engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    #[serde(alias = "time_limit_exceeded")]
    TimeLimit,
    RuntimeError,
    CompilationError,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::TimeLimit => "time_limit",
            Self::RuntimeError => "runtime_error",
            Self::CompilationError => "compilation_error",
        }
    }

    /// Check if this status means the solution was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
