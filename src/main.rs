//! Duel Ratings - Application Entry Point
//!
//! This is the main entry point for the rating server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duel_ratings::{config::CONFIG, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let json = CONFIG.server.log_json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting rating server...");
    tracing::info!(
        k_base = CONFIG.rating.k_base,
        k_min = CONFIG.rating.k_min,
        k_max = CONFIG.rating.k_max,
        penalty_per_wrong_minutes = CONFIG.rating.penalty_per_wrong_minutes,
        mperf_model = CONFIG.rating.mperf_model.as_str(),
        "Rating engine configured"
    );

    // Create application state
    let state = AppState::new(CONFIG.clone());

    // Build the router
    let app = handlers::create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
