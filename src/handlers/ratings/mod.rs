//! Rating handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Rating routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(handler::resolve_session))
        .route("/matchup", post(handler::rate_matchup))
}
