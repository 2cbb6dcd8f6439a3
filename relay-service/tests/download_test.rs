mod common;

use common::TestApp;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn invalid_file_type_is_rejected_before_upstream() {
    let app = TestApp::spawn().await;
    // Nothing should reach the engine
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.engine)
        .await;

    let response = reqwest::get(format!("{}/api/download/sess-1/notes.txt", app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse body");
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("articles.json"));
    assert!(message.contains("strategy.md"));
}

#[tokio::test]
async fn artifact_bytes_and_headers_are_forwarded() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/webhook/download/sess-9/articles.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(&br#"[{"title":"Jardins de Lyon"}]"#[..])
                .insert_header("content-type", "application/json")
                .insert_header("content-disposition", "attachment; filename=\"articles.json\""),
        )
        .expect(1)
        .mount(&app.engine)
        .await;

    let response = reqwest::get(format!("{}/api/download/sess-9/articles.json", app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        response
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"articles.json\"")
    );

    let bytes = response.bytes().await.expect("Failed to read body");
    assert_eq!(&bytes[..], br#"[{"title":"Jardins de Lyon"}]"#);
}

#[tokio::test]
async fn strategy_artifact_roundtrips() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/webhook/download/sess-9/strategy.md"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(&b"# SEO strategy\n\nLocal focus.\n"[..])
                .insert_header("content-type", "text/markdown"),
        )
        .mount(&app.engine)
        .await;

    let response = reqwest::get(format!("{}/api/download/sess-9/strategy.md", app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let bytes = response.bytes().await.expect("Failed to read body");
    assert_eq!(&bytes[..], b"# SEO strategy\n\nLocal focus.\n");
}

#[tokio::test]
async fn upstream_404_maps_to_404() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/webhook/download/ghost/articles.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.engine)
        .await;

    let response = reqwest::get(format!("{}/api/download/ghost/articles.json", app.address))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse body");
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("File not found"));
}
