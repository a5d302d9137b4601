//! Duel Ratings - rating adjustment engine for head-to-head contests
//!
//! This library turns the outcome of a finished competitive-programming
//! session into updated skill ratings for every participant.
//!
//! # Features
//!
//! - Elo-style update with experience-sized, bounded K-factors
//! - Performance modifiers for ICPC (penalty time) and IOI (scored time)
//! - Pairwise resolution for 1v1 rooms, aggregate resolution for team rooms
//! - Stateless HTTP boundary for the session-finalize collaborator
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: request normalisation and orchestration
//! - **Rating**: the pure engine
//! - **Models**: canonical engine schema

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod rating;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use rating::{RatingError, RatingParams, resolve_session};
pub use state::AppState;
