use serde::{Deserialize, Serialize};
use validator::Validate;

/// A generation request as the form UI sends it.
///
/// The wire format is camelCase to match the browser payload. Required
/// fields carry serde defaults so a partial body still deserializes and the
/// validation layer can report every missing field at once instead of
/// failing on the first one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
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

impl GenerationRequest {
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

/// Writing tone requested for the generated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Expert,
}

/// What the generated content should optimize for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objectives {
    Traffic,
    Conversion,
    #[default]
    Both,
}
