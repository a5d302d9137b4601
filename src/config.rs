//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_K_BASE, DEFAULT_K_MAX, DEFAULT_K_MIN, DEFAULT_LOG_FILTER, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, ICPC_PENALTY_MINUTES,
};
use crate::rating::{MperfModel, RatingParams};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub rating: RatingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
}

/// Rating engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
    /// Base K-factor before multipliers
    pub k_base: f64,
    /// ICPC minutes per rejected attempt on a solved problem
    pub penalty_per_wrong_minutes: f64,
    pub k_min: f64,
    pub k_max: f64,
    /// Mperf mapping, fixed for the lifetime of the deployment
    pub mperf_model: MperfModel,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            rating: RatingConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            log_json: env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_base: DEFAULT_K_BASE,
            penalty_per_wrong_minutes: ICPC_PENALTY_MINUTES,
            k_min: DEFAULT_K_MIN,
            k_max: DEFAULT_K_MAX,
            mperf_model: MperfModel::Step,
        }
    }
}

impl RatingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let mperf_model = match env::var("RATING_MPERF_MODEL") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RATING_MPERF_MODEL".to_string()))?,
            Err(_) => MperfModel::Step,
        };

        let config = Self {
            k_base: parse_var("RATING_K_BASE", DEFAULT_K_BASE)?,
            penalty_per_wrong_minutes: parse_var(
                "RATING_PENALTY_PER_WRONG_MINUTES",
                ICPC_PENALTY_MINUTES,
            )?,
            k_min: parse_var("RATING_K_MIN", DEFAULT_K_MIN)?,
            k_max: parse_var("RATING_K_MAX", DEFAULT_K_MAX)?,
            mperf_model,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject constant combinations the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.k_base.is_finite() && self.k_base > 0.0) {
            return Err(ConfigError::InvalidValue("RATING_K_BASE".to_string()));
        }
        if !(self.penalty_per_wrong_minutes.is_finite() && self.penalty_per_wrong_minutes >= 0.0) {
            return Err(ConfigError::InvalidValue(
                "RATING_PENALTY_PER_WRONG_MINUTES".to_string(),
            ));
        }
        if !(self.k_min.is_finite() && self.k_max.is_finite() && self.k_min <= self.k_max) {
            return Err(ConfigError::InvalidValue("RATING_K_MIN/RATING_K_MAX".to_string()));
        }
        Ok(())
    }

    /// Engine parameters for this deployment
    pub fn params(&self) -> RatingParams {
        RatingParams {
            k_base: self.k_base,
            penalty_per_wrong_minutes: self.penalty_per_wrong_minutes,
            k_min: self.k_min,
            k_max: self.k_max,
            mperf_model: self.mperf_model,
        }
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
