use crate::startup::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use service_core::error::AppError;

/// Proxy the engine's status document for one session.
///
/// The payload is not interpreted here beyond existence checks; the client
/// decides what "completed" means for it.
#[tracing::instrument(skip(state))]
pub async fn session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let response = state.engine.fetch_status(&session_id).await?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(session_not_found(&session_id));
    }
    if !response.status().is_success() {
        return Err(AppError::InternalError(anyhow::anyhow!(
            "Workflow engine returned status {} for session {}",
            response.status(),
            session_id
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| AppError::BadGateway(format!("Failed to read status body: {e}")))?;

    // An empty body means the engine has no record of the session.
    if text.trim().is_empty() {
        return Err(session_not_found(&session_id));
    }

    let mut payload: Value = serde_json::from_str(&text)
        .map_err(|e| AppError::BadGateway(format!("Workflow engine returned invalid JSON: {e}")))?;

    // Some engine configurations double-encode the status document.
    if let Value::String(inner) = &payload {
        if let Ok(decoded) = serde_json::from_str::<Value>(inner) {
            payload = decoded;
        }
    }

    if payload.is_null() {
        return Err(session_not_found(&session_id));
    }

    Ok(Json(payload))
}

fn session_not_found(session_id: &str) -> AppError {
    AppError::NotFound(anyhow::anyhow!("Session not found: {session_id}"))
}
