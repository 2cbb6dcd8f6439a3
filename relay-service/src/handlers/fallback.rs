use axum::extract::OriginalUri;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// JSON 404 for unknown API routes, matching the error shape of the rest of
/// the API. Non-API paths fall through to the static SPA instead.
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Route not found",
            "path": uri.path(),
        })),
    )
}
