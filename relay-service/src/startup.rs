//! Application wiring: router construction and server lifecycle.

use crate::config::RelayConfig;
use crate::handlers::{
    api_not_found, download_artifact, generate, health_check, metrics, session_status,
};
use crate::services::WorkflowEngineClient;
use axum::http::{header, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::security_headers::security_headers_middleware;
use service_core::middleware::tracing::request_id_middleware;
use service_core::observability::metrics::init_metrics;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared application state. The relay is stateless; this only carries the
/// engine client so handlers can forward requests.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<WorkflowEngineClient>,
}

pub fn build_router(config: &RelayConfig, state: AppState) -> Result<Router, AppError> {
    let origin = config
        .frontend
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid FRONTEND_ORIGIN '{}': {}",
                config.frontend.allowed_origin,
                e
            ))
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let api = Router::new()
        .route("/generate-seo", post(generate))
        .route("/status/:session_id", get(session_status))
        .route("/download/:session_id/:file_type", get(download_artifact))
        .route("/health", get(health_check))
        .fallback(api_not_found);

    // The built form UI; unknown non-API paths get index.html so the SPA
    // router can take over.
    let static_dir = PathBuf::from(&config.frontend.static_dir);
    let spa = ServeDir::new(&static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    Ok(Router::new()
        .nest("/api", api)
        .route("/metrics", get(metrics))
        .fallback_service(spa)
        .layer(cors)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration. Binding port 0
    /// picks a random port, which tests rely on.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        init_metrics();

        let engine = Arc::new(WorkflowEngineClient::new(config.engine.clone()));
        let state = AppState { engine };
        let router = build_router(&config, state)?;

        let address = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            engine_url = %config.engine.base_url,
            origin = %config.frontend.allowed_origin,
            "Relay service configured"
        );

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
