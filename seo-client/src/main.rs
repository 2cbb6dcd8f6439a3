//! Command-line front end: submit a request file, poll to completion and
//! download the artifacts.

use anyhow::Context;
use seo_client::api::ApiClient;
use seo_client::models::{ArtifactKind, GenerationForm, GenerationStatus};
use seo_client::poller::StatusPoller;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: seo-client <request.json>")?;
    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());

    let raw = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let form: GenerationForm =
        serde_json::from_str(&raw).with_context(|| format!("Invalid request file {path}"))?;

    let client = ApiClient::new(api_url);
    let session = client.submit(&form).await?;
    tracing::info!(session_id = %session.session_id, "Generation started");

    let mut poller = StatusPoller::new(&client);
    let outcome = poller
        .run_with(&session.session_id, |payload| {
            tracing::info!(
                status = %payload.status,
                progress = ?payload.progress,
                step = payload.current_step.as_deref().unwrap_or("-"),
                "Waiting for the workflow engine"
            );
        })
        .await?;

    if outcome.status != GenerationStatus::Completed {
        anyhow::bail!("Generation failed for session {}", session.session_id);
    }

    for kind in ArtifactKind::ALL {
        let bytes = client.download(&session.session_id, kind).await?;
        tokio::fs::write(kind.file_name(), &bytes)
            .await
            .with_context(|| format!("Failed to write {}", kind.file_name()))?;
        tracing::info!(file = kind.file_name(), size = bytes.len(), "Artifact saved");
    }

    Ok(())
}
