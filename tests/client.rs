use emailable_client::{Client, Error};
use httpmock::prelude::*;
use std::time::Duration;

const EMAIL: &str = "x@y.com";

fn client_for(server: &MockServer) -> Client {
    Client::builder("test_key")
        .base_url(server.url("/v1/"))
        .build()
        .expect("client builds")
}

async fn respond_with(server: &MockServer, status: u16, body: &'static str) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/verify");
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
        .await;
}

#[tokio::test]
async fn sends_key_and_email_as_form_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/verify")
                .x_www_form_urlencoded_tuple("api_key", "test_key")
                .x_www_form_urlencoded_tuple("email", EMAIL);
            then.status(200).body(r#"{"state":"deliverable"}"#);
        })
        .await;

    assert!(client_for(&server).is_deliverable(EMAIL).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn undeliverable_without_disposable_flag() {
    let server = MockServer::start_async().await;
    respond_with(&server, 200, r#"{"state":"undeliverable","disposable":""}"#).await;
    let client = client_for(&server);

    assert!(!client.is_deliverable(EMAIL).await);
    assert!(!client.is_disposable(EMAIL).await);
}

#[tokio::test]
async fn deliverable_and_disposable() {
    let server = MockServer::start_async().await;
    respond_with(&server, 200, r#"{"state":"deliverable","disposable":1}"#).await;
    let client = client_for(&server);

    assert!(client.is_deliverable(EMAIL).await);
    assert!(client.is_disposable(EMAIL).await);
}

#[tokio::test]
async fn each_check_issues_its_own_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/verify");
            then.status(200).body(r#"{"state":"risky","disposable":true}"#);
        })
        .await;
    let client = client_for(&server);

    assert!(client.is_deliverable(EMAIL).await);
    assert!(client.is_disposable(EMAIL).await);
    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn verify_answers_both_from_one_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/verify");
            then.status(200)
                .body(r#"{"state":"undeliverable","disposable":"1","score":0}"#);
        })
        .await;

    let result = client_for(&server).verify(EMAIL).await;
    assert_eq!(result.state(), Some("undeliverable"));
    assert!(!result.is_deliverable());
    assert!(result.is_disposable());
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn empty_body_uses_defaults() {
    let server = MockServer::start_async().await;
    respond_with(&server, 200, "").await;
    let client = client_for(&server);

    assert!(client.is_deliverable(EMAIL).await);
    assert!(!client.is_disposable(EMAIL).await);
    assert!(client.try_verify(EMAIL).await.expect("empty is ok").is_empty());
}

#[tokio::test]
async fn malformed_json_uses_defaults() {
    let server = MockServer::start_async().await;
    respond_with(&server, 200, "{\"state\":\"undeliver").await;
    let client = client_for(&server);

    assert!(client.is_deliverable(EMAIL).await);
    assert!(!client.is_disposable(EMAIL).await);
    assert!(matches!(client.try_verify(EMAIL).await, Err(Error::Json(_))));
}

#[tokio::test]
async fn error_statuses_use_defaults() {
    for status in [401, 403, 429, 500, 503] {
        let server = MockServer::start_async().await;
        respond_with(&server, status, r#"{"state":"undeliverable","disposable":1}"#).await;
        let client = client_for(&server);

        assert!(client.is_deliverable(EMAIL).await, "status {status}");
        assert!(!client.is_disposable(EMAIL).await, "status {status}");
        assert!(matches!(
            client.try_verify(EMAIL).await,
            Err(Error::Request(_))
        ));
    }
}

#[tokio::test]
async fn connection_refused_uses_defaults() {
    let client = Client::builder("test_key")
        .base_url("http://127.0.0.1:1/v1/")
        .build()
        .expect("client builds");

    assert!(client.is_deliverable(EMAIL).await);
    assert!(!client.is_disposable(EMAIL).await);
    assert!(matches!(
        client.try_verify(EMAIL).await,
        Err(Error::Request(_))
    ));
}

#[tokio::test]
async fn timeout_uses_defaults() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/verify");
            then.status(200)
                .delay(Duration::from_secs(2))
                .body(r#"{"state":"undeliverable","disposable":1}"#);
        })
        .await;
    let client = Client::builder("test_key")
        .base_url(server.url("/v1/"))
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client builds");

    assert!(client.is_deliverable(EMAIL).await);
    assert!(!client.is_disposable(EMAIL).await);
}
