//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The store is loaded before the listener binds, so a running server is
/// always ready.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status. An empty store is reported but still healthy to
/// serve: the dashboard renders zero rows.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let transactions = state.store.len();
    let status = if transactions == 0 { "empty" } else { "healthy" };

    Json(HealthResponse {
        status: status.to_string(),
        transactions,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
