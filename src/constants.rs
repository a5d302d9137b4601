//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Maximum accepted request body (2 MB)
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Request timeout in seconds
pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

// =============================================================================
// ELO DEFAULTS
// =============================================================================

/// Base K-factor before experience and performance multipliers
pub const DEFAULT_K_BASE: f64 = 32.0;

/// Lower bound of the effective K-factor
pub const DEFAULT_K_MIN: f64 = 10.0;

/// Upper bound of the effective K-factor
pub const DEFAULT_K_MAX: f64 = 60.0;

/// Rating gap at which the stronger player is expected to win ten times as often
pub const ELO_SCALE: f64 = 400.0;

/// Penalty time for a wrong submission in ICPC mode (in minutes)
pub const ICPC_PENALTY_MINUTES: f64 = 20.0;

/// Lowest rating the platform assigns
pub const MIN_RATING: i32 = 0;

/// Highest rating the platform assigns
pub const MAX_RATING: i32 = 4000;

/// Minimum number of participants in a rated session
pub const MIN_PARTICIPANTS: usize = 2;

/// Maximum number of participants accepted in one session request
pub const MAX_PARTICIPANTS: u64 = 256;

/// Maximum submissions accepted per participant
pub const MAX_SUBMISSIONS_PER_PARTICIPANT: u64 = 2048;

// =============================================================================
// CONTEST SETTINGS
// =============================================================================

/// Contest formats
pub mod formats {
    pub const ICPC: &str = "icpc";
    pub const IOI: &str = "ioi";
    pub const LONG: &str = "long";

    /// All supported formats
    pub const ALL: &[&str] = &[ICPC, IOI, LONG];
}

/// Room modes
pub mod room_modes {
    pub const ONE_VS_ONE: &str = "1v1";
    pub const TEAM_VS_TEAM: &str = "team-vs-team";

    /// All supported room modes
    pub const ALL: &[&str] = &[ONE_VS_ONE, TEAM_VS_TEAM];
}

/// Team sides in team-vs-team rooms
pub mod team_types {
    pub const HOST: &str = "host";
    pub const OPPONENT: &str = "opponent";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
