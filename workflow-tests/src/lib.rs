//! End-to-end test harness: a relay wired to a scripted workflow engine.

use relay_service::config::{EngineConfig, FrontendConfig, RelayConfig};
use relay_service::startup::Application;
use seo_client::api::ApiClient;
use seo_client::models::GenerationForm;
use service_core::config::Config as CoreConfig;
use std::time::Duration;
use wiremock::MockServer;

pub struct WorkflowTestContext {
    pub engine: MockServer,
    pub api: ApiClient,
    pub relay_url: String,
}

impl WorkflowTestContext {
    /// Start a mock engine and a relay pointed at it, both on random ports.
    pub async fn new() -> anyhow::Result<Self> {
        let engine = MockServer::start().await;

        let mut engine_config = EngineConfig::new(engine.uri());
        engine_config.generate_timeout = Duration::from_secs(2);
        engine_config.status_timeout = Duration::from_secs(2);
        engine_config.download_timeout = Duration::from_secs(2);

        let config = RelayConfig {
            common: CoreConfig { port: 0 },
            engine: engine_config,
            frontend: FrontendConfig {
                allowed_origin: "http://localhost:3000".to_string(),
                static_dir: "public".to_string(),
            },
        };

        let app = Application::build(config).await?;
        let relay_url = format!("http://127.0.0.1:{}", app.port());
        tokio::spawn(app.run_until_stopped());

        let api = ApiClient::new(relay_url.clone());
        Ok(Self {
            engine,
            api,
            relay_url,
        })
    }
}

/// A form that passes validation, for tests that need one.
pub fn sample_form() -> GenerationForm {
    serde_json::from_value(serde_json::json!({
        "companyName": "Maison Verte",
        "websiteUrl": "https://maisonverte.example",
        "services": "Landscaping and garden design",
        "geographicZone": "Lyon",
        "keywords": "garden, landscaping",
        "email": "owner@maisonverte.example",
        "emailNotification": true
    }))
    .expect("sample form is valid")
}
