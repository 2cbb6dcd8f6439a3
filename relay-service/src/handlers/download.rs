use crate::models::ArtifactKind;
use crate::startup::AppState;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use service_core::error::AppError;

/// Stream an artifact from the engine to the caller unchanged.
///
/// The file type is checked against the closed artifact set before the
/// engine is contacted; `Content-Type` and `Content-Disposition` pass
/// through when the engine sets them.
#[tracing::instrument(skip(state))]
pub async fn download_artifact(
    State(state): State<AppState>,
    Path((session_id, file_type)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let kind = ArtifactKind::from_name(&file_type).ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!(
            "Invalid file type: {}. Must be one of: {}",
            file_type,
            ArtifactKind::VALID_NAMES
        ))
    })?;

    let response = state.engine.fetch_artifact(&session_id, kind).await?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "File not found: {}/{}",
            session_id,
            kind.file_name()
        )));
    }
    if !response.status().is_success() {
        return Err(AppError::InternalError(anyhow::anyhow!(
            "Workflow engine returned status {} for {}/{}",
            response.status(),
            session_id,
            kind.file_name()
        )));
    }

    let content_type = forwarded_header(&response, header::CONTENT_TYPE.as_str());
    let content_disposition = forwarded_header(&response, header::CONTENT_DISPOSITION.as_str());

    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(value) = content_type {
        builder = builder.header(header::CONTENT_TYPE, value);
    }
    if let Some(value) = content_disposition {
        builder = builder.header(header::CONTENT_DISPOSITION, value);
    }

    builder
        .body(Body::from_stream(response.bytes_stream()))
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to build download response: {e}")))
}

fn forwarded_header(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
