//! HTTP API.
//!
//! Provides the JSON endpoints:
//! - `/` - service descriptor
//! - `/health` - liveness check
//! - `/profile/{username}` - full profile record in a response envelope
//! - `/check/{username}` - existence check
//! - `/image/{username}` - profile picture and snapcode
//! - `/status` - request and error counters
//!
//! Every response body is JSON and carries the configured `Owner` attribution,
//! except `/health` and `/status`.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::{
    check_handler, health_handler, home_handler, image_handler, profile_handler, status_handler,
};
pub use types::{
    ApiState, CheckResponse, CounterGroup, ImageBody, ImageResponse, ResponseEnvelope,
    ServiceDescriptor, StatusResponse,
};

/// Builds the router with every endpoint bound to `state`.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/profile/{username}", get(profile_handler))
        .route("/check/{username}", get(check_handler))
        .route("/image/{username}", get(image_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Binds the configured address and serves the API until the process exits.
pub async fn start_server(state: ApiState) -> Result<(), anyhow::Error> {
    let address = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", address, e))?;

    log::info!("API server listening on http://{}/", address);
    log::info!("  - Profile: http://{}/profile/{{username}}", address);
    log::info!("  - Status: http://{}/status", address);

    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
