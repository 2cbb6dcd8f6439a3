use crate::error::ClientError;
use crate::models::{ArtifactKind, GenerationForm, SessionHandle, StatusPayload};
use serde_json::Value;
use validator::Validate;

/// Client for the relay's public API, playing the browser's role.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate and submit the form; returns the engine's session handle.
    pub async fn submit(&self, form: &GenerationForm) -> Result<SessionHandle, ClientError> {
        if form.validate().is_err() {
            return Err(ClientError::MissingFields(
                form.missing_fields().into_iter().map(String::from).collect(),
            ));
        }

        let response = self
            .client
            .post(format!("{}/api/generate-seo", self.base_url))
            .json(form)
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Fetch the current status document for a session.
    pub async fn status(&self, session_id: &str) -> Result<StatusPayload, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/status/{}", self.base_url, session_id))
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Download one artifact; returns its raw bytes.
    pub async fn download(
        &self,
        session_id: &str,
        kind: ArtifactKind,
    ) -> Result<Vec<u8>, ClientError> {
        let response = self
            .client
            .get(format!(
                "{}/api/download/{}/{}",
                self.base_url,
                session_id,
                kind.file_name()
            ))
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Turn non-2xx responses into `ClientError::Api` with the server's message.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown server error")
                .to_string(),
            Err(_) => "Unknown server error".to_string(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
