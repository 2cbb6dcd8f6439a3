use seo_client::models::{GenerationForm, Objectives, Tone};
use serde_json::json;
use validator::Validate;

#[tokio::test]
async fn submit_rejects_incomplete_form_without_touching_the_network() {
    use seo_client::api::ApiClient;
    use seo_client::error::ClientError;

    let form: GenerationForm =
        serde_json::from_value(json!({ "companyName": "Maison Verte" })).unwrap();

    // Point at a URL that would fail; validation must trip first
    let client = ApiClient::new("http://127.0.0.1:1");
    match client.submit(&form).await {
        Err(ClientError::MissingFields(fields)) => {
            assert_eq!(fields, vec!["websiteUrl", "services", "geographicZone"]);
        }
        other => panic!("Expected MissingFields, got {other:?}"),
    }
}

#[test]
fn minimal_form_gets_browser_defaults() {
    let form: GenerationForm = serde_json::from_value(json!({
        "companyName": "Maison Verte",
        "websiteUrl": "https://maisonverte.example",
        "services": "Landscaping",
        "geographicZone": "Lyon"
    }))
    .unwrap();

    assert!(form.validate().is_ok());
    assert_eq!(form.tone, Tone::Professional);
    assert_eq!(form.objectives, Objectives::Both);
    assert!(!form.email_notification);
}

#[test]
fn unknown_tone_is_rejected_at_parse_time() {
    let result = serde_json::from_value::<GenerationForm>(json!({
        "companyName": "A",
        "websiteUrl": "https://a.example",
        "services": "s",
        "geographicZone": "z",
        "tone": "casual"
    }));

    assert!(result.is_err());
}
