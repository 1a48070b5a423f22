use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use super::AppState;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "ltl-quote",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
/// Ready once the current rate schedule passes validation
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.load();

    match config.rates.validate() {
        Ok(()) => (StatusCode::OK, Json(json!({
            "status": "ready",
            "service": "ltl-quote",
            "destinations": config.rates.destinations.len(),
        }))),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({
            "status": "not_ready",
            "service": "ltl-quote",
            "reason": e.to_string(),
        }))),
    }
}
