use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Liveness probe. Reports the engine URL so a misconfigured deployment is
/// visible from the outside.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "relay-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "engineUrl": state.engine.base_url(),
    }))
}
