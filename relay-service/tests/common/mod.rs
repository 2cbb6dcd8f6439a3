//! Shared helpers for relay integration tests.

use relay_service::config::{EngineConfig, FrontendConfig, RelayConfig};
use relay_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::time::Duration;
use wiremock::MockServer;

/// A relay bound to a random port, backed by a mock workflow engine.
pub struct TestApp {
    pub address: String,
    pub engine: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let engine = MockServer::start().await;
        let address = spawn_relay(engine_config(engine.uri())).await;
        Self { address, engine }
    }
}

/// Engine config with short timeouts so timeout paths are testable.
pub fn engine_config(base_url: String) -> EngineConfig {
    let mut engine = EngineConfig::new(base_url);
    engine.generate_timeout = Duration::from_millis(500);
    engine.status_timeout = Duration::from_millis(500);
    engine.download_timeout = Duration::from_millis(500);
    engine
}

/// Spawn a relay with the given engine config; returns its base address.
pub async fn spawn_relay(engine: EngineConfig) -> String {
    let config = RelayConfig {
        common: CoreConfig { port: 0 },
        engine,
        frontend: FrontendConfig {
            allowed_origin: "http://localhost:3000".to_string(),
            static_dir: "public".to_string(),
        },
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build relay application");
    let port = app.port();
    tokio::spawn(app.run_until_stopped());

    format!("http://127.0.0.1:{port}")
}

/// An address nothing listens on, for connection-refused scenarios.
pub fn dead_endpoint() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind throwaway listener");
    let port = listener
        .local_addr()
        .expect("Failed to read local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
