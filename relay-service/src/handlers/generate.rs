use crate::models::GenerationRequest;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;
use validator::Validate;

/// Relay a generation request to the workflow engine.
///
/// The upstream body is returned verbatim: the engine decides the session id
/// and everything else about the job.
#[tracing::instrument(skip(state, request), fields(company = %request.company_name))]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<Value>, AppError> {
    if request.validate().is_err() {
        let missing = request.missing_fields();
        tracing::warn!(missing = ?missing, "Rejected generation request");
        return Err(AppError::MissingFields(
            missing.into_iter().map(String::from).collect(),
        ));
    }

    let response = state.engine.submit_generation(&request).await?;

    let status = response.status();
    if !status.is_success() {
        let message = upstream_error_message(response).await;
        tracing::warn!(status = %status, message = %message, "Workflow engine rejected generation request");
        return Err(AppError::UpstreamStatus {
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| AppError::BadGateway(format!("Workflow engine returned invalid JSON: {e}")))?;

    Ok(Json(body))
}

/// Best-effort extraction of the engine's error message.
async fn upstream_error_message(response: reqwest::Response) -> String {
    match response.json::<Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| "Workflow engine error".to_string()),
        Err(_) => "Workflow engine error".to_string(),
    }
}
