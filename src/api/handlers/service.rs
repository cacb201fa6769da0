//! Service-level handlers: descriptor, health and counters.

use std::collections::BTreeMap;
use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::super::types::{ApiState, CounterGroup, ServiceDescriptor, StatusResponse};
use crate::config::API_NAME;

/// Service descriptor listing the public endpoints.
pub async fn home_handler(State(state): State<ApiState>) -> Json<ServiceDescriptor> {
    let endpoints = BTreeMap::from([
        ("/profile/{username}", "Full profile info"),
        ("/check/{username}", "Check if username exists"),
        ("/image/{username}", "Profile image only"),
        ("/status", "Request and error counters"),
        ("/health", "Liveness check"),
    ]);
    Json(ServiceDescriptor {
        api: API_NAME,
        status: "running",
        owner: state.owner(),
        endpoints,
    })
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Counters accumulated since startup.
pub async fn status_handler(State(state): State<ApiState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        requests_served: state.requests_served.load(Ordering::SeqCst),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        errors: CounterGroup::new(state.stats.error_counts()),
        warnings: CounterGroup::new(state.stats.warning_counts()),
        info: CounterGroup::new(state.stats.info_counts()),
    })
}
