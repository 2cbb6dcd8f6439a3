//! HTTP client for the external workflow engine.
//!
//! The engine is an opaque collaborator: requests are forwarded as-is and
//! responses come back untouched. Only transport failures are translated
//! into the relay's error taxonomy here; status-code handling stays in the
//! handlers so each endpoint can apply its own rules.

use crate::config::EngineConfig;
use crate::models::{ArtifactKind, GenerationRequest};
use service_core::error::AppError;

const WEBHOOK_PATH: &str = "/webhook";

pub struct WorkflowEngineClient {
    client: reqwest::Client,
    settings: EngineConfig,
}

impl WorkflowEngineClient {
    pub fn new(settings: EngineConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn webhook_url(&self, suffix: &str) -> String {
        format!(
            "{}{}{}",
            self.settings.base_url.trim_end_matches('/'),
            WEBHOOK_PATH,
            suffix
        )
    }

    /// Forward a generation request to the engine's intake webhook.
    #[tracing::instrument(skip(self, request), fields(company = %request.company_name))]
    pub async fn submit_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<reqwest::Response, AppError> {
        let url = self.webhook_url("/seo-generation");
        tracing::debug!(url = %url, "Forwarding generation request");

        self.client
            .post(&url)
            .json(request)
            .timeout(self.settings.generate_timeout)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))
    }

    /// Fetch the engine's status document for a session.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_status(&self, session_id: &str) -> Result<reqwest::Response, AppError> {
        let url = self.webhook_url(&format!("/status/{session_id}"));

        self.client
            .get(&url)
            .timeout(self.settings.status_timeout)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))
    }

    /// Fetch an artifact for a session; the caller streams the body.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_artifact(
        &self,
        session_id: &str,
        kind: ArtifactKind,
    ) -> Result<reqwest::Response, AppError> {
        let url = self.webhook_url(&format!("/download/{session_id}/{}", kind.file_name()));

        self.client
            .get(&url)
            .timeout(self.settings.download_timeout)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        tracing::warn!(url = %url, "Workflow engine request timed out");
        AppError::GatewayTimeout("Workflow engine did not respond in time".to_string())
    } else if err.is_connect() {
        tracing::warn!(url = %url, error = %err, "Workflow engine unreachable");
        AppError::ServiceUnavailable("Workflow engine is unreachable".to_string())
    } else {
        tracing::error!(url = %url, error = %err, "Workflow engine request failed");
        AppError::BadGateway(format!("Workflow engine request failed: {err}"))
    }
}
