use seo_client::api::ApiClient;
use seo_client::error::ClientError;
use seo_client::models::GenerationStatus;
use seo_client::poller::{PollOptions, PollState, StatusPoller};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_options() -> PollOptions {
    PollOptions {
        interval: Duration::from_millis(20),
        max_attempts: None,
    }
}

/// Serve `first` for `n` checks, then `terminal` forever.
async fn mount_status_sequence(server: &MockServer, session: &str, n: u64, first: Value, terminal: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/status/{session}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(first))
        .up_to_n_times(n)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/status/{session}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(terminal))
        .mount(server)
        .await;
}

#[tokio::test]
async fn stops_on_first_completed_status() {
    let server = MockServer::start().await;
    mount_status_sequence(
        &server,
        "sess-1",
        2,
        json!({ "status": "in-progress", "progress": 40 }),
        json!({ "status": "completed", "progress": 100, "results": { "summary": {} } }),
    )
    .await;

    let client = ApiClient::new(server.uri());
    let mut poller = StatusPoller::with_options(&client, fast_options());
    let outcome = poller.run("sess-1").await.expect("poll should succeed");

    assert_eq!(outcome.status, GenerationStatus::Completed);
    assert_eq!(poller.state(), PollState::Completed);
    assert!(outcome.results.is_some());

    // Two in-progress checks, then exactly one terminal check
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn stops_on_failed_status() {
    let server = MockServer::start().await;
    mount_status_sequence(
        &server,
        "sess-2",
        1,
        json!({ "status": "in-progress" }),
        json!({ "status": "failed", "error": "generation aborted" }),
    )
    .await;

    let client = ApiClient::new(server.uri());
    let mut poller = StatusPoller::with_options(&client, fast_options());
    let outcome = poller.run("sess-2").await.expect("poll should succeed");

    assert_eq!(outcome.status, GenerationStatus::Failed);
    assert_eq!(poller.state(), PollState::Failed);
    assert_eq!(
        outcome.extra.get("error").and_then(Value::as_str),
        Some("generation aborted")
    );
}

#[tokio::test]
async fn transient_errors_do_not_stop_polling() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status/sess-3"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "blip" })))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/status/sess-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "completed" })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let mut poller = StatusPoller::with_options(&client, fast_options());
    let outcome = poller.run("sess-3").await.expect("poll should succeed");

    assert_eq!(outcome.status, GenerationStatus::Completed);
}

#[tokio::test]
async fn unknown_status_strings_are_not_terminal() {
    let server = MockServer::start().await;
    mount_status_sequence(
        &server,
        "sess-4",
        2,
        json!({ "status": "queued" }),
        json!({ "status": "completed" }),
    )
    .await;

    let client = ApiClient::new(server.uri());
    let mut poller = StatusPoller::with_options(&client, fast_options());
    let outcome = poller.run("sess-4").await.expect("poll should succeed");

    assert_eq!(outcome.status, GenerationStatus::Completed);
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn attempt_cap_yields_poll_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status/sess-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "in-progress" })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let mut poller = StatusPoller::with_options(
        &client,
        PollOptions {
            interval: Duration::from_millis(20),
            max_attempts: Some(3),
        },
    );

    match poller.run("sess-5").await {
        Err(ClientError::PollTimeout(3)) => {}
        other => panic!("Expected PollTimeout(3), got {other:?}"),
    }

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}
