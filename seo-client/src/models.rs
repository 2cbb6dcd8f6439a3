//! Client-side mirrors of the relay's wire types.
//!
//! The status document belongs to the workflow engine; everything beyond the
//! terminal-status check is carried opaquely so the engine can evolve its
//! payload without breaking this client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use validator::Validate;

/// The business parameters a user fills in before submitting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub company_name: String,

    #[validate(length(min = 1))]
    #[serde(default)]
    pub website_url: String,

    #[validate(length(min = 1))]
    #[serde(default)]
    pub services: String,

    #[validate(length(min = 1))]
    #[serde(default)]
    pub geographic_zone: String,

    #[serde(default)]
    pub keywords: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub objectives: Objectives,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub email_notification: bool,
}

impl GenerationForm {
    /// Names of the required fields that are empty, in wire casing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.company_name.trim().is_empty() {
            missing.push("companyName");
        }
        if self.website_url.trim().is_empty() {
            missing.push("websiteUrl");
        }
        if self.services.trim().is_empty() {
            missing.push("services");
        }
        if self.geographic_zone.trim().is_empty() {
            missing.push("geographicZone");
        }
        missing
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Expert,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objectives {
    Traffic,
    Conversion,
    #[default]
    Both,
}

/// The engine's acknowledgement of a submitted request. Only the session id
/// matters to this client; the rest rides along untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHandle {
    pub session_id: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One status document as returned by the relay.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    pub status: GenerationStatus,

    #[serde(default)]
    pub progress: Option<f64>,

    #[serde(default)]
    pub current_step: Option<String>,

    #[serde(default)]
    pub results: Option<Value>,

    #[serde(default)]
    pub duration: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Engine-owned status string. Unknown values are preserved rather than
/// rejected; only `completed` and `failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum GenerationStatus {
    InProgress,
    Completed,
    Failed,
    Other(String),
}

impl From<String> for GenerationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "in-progress" | "in_progress" | "processing" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl GenerationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in-progress"),
            Self::Completed => f.write_str("completed"),
            Self::Failed => f.write_str("failed"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Downloadable artifacts produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Articles,
    Strategy,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 2] = [Self::Articles, Self::Strategy];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Articles => "articles.json",
            Self::Strategy => "strategy.md",
        }
    }
}
