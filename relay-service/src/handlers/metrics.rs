use axum::{http::StatusCode, response::IntoResponse};
use service_core::observability::metrics::render_metrics;

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        render_metrics(),
    )
}
