//! HTTP failures surfacing through the resource layer.

use super::common::desk;
use desk_api::client::ErrorKind as TransportKind;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_not_found() {
    let (server, desk) = desk().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/topics/9999.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Resource Not Found"})))
        .mount(&server)
        .await;

    let err = desk.topics().retrieve(9999).await.unwrap_err();

    assert!(err.is_transport());
    let transport = err.transport_error().expect("transport error kept");
    assert!(transport.is_not_found());
    assert_eq!(transport.status(), Some(404));
}

#[tokio::test]
async fn test_validation_failure() {
    let (server, desk) = desk().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/customers.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "success": false,
            "errors": {"last_name": ["is too long"]}
        })))
        .mount(&server)
        .await;

    let err = desk.customers().create("Ada", &"x".repeat(300)).await.unwrap_err();

    assert!(err.transport_error().is_some_and(|e| e.is_validation_failure()));
    match err.transport_error().map(|e| &e.kind) {
        Some(TransportKind::Api { status, message }) => {
            assert_eq!(*status, 422);
            assert_eq!(message, "last_name is too long");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_is_not_retried() {
    let (server, desk) = desk().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .expect(1)
        .mount(&server)
        .await;

    let err = desk.cases().retrieve_all(50, 1).await.unwrap_err();

    let transport = err.transport_error().expect("transport error kept");
    assert!(transport.is_rate_limited());
    assert_eq!(transport.retry_after(), Some(Duration::from_secs(30)));
}

#[tokio::test]
async fn test_success_false_envelope_is_a_decoding_error() {
    let (server, desk) = desk().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/macros/12.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Macro is in use"
        })))
        .mount(&server)
        .await;

    let err = desk.macros().destroy(12).await.unwrap_err();

    assert!(err.is_decoding());
    assert!(err.to_string().contains("Macro is in use"));
}

#[tokio::test]
async fn test_unexpected_envelope_is_a_decoding_error() {
    let (server, desk) = desk().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"agent": {"id": 1}})))
        .mount(&server)
        .await;

    let err = desk.users().retrieve(1).await.unwrap_err();
    assert!(err.is_decoding());
}

#[tokio::test]
async fn test_html_body_on_success_is_a_decoding_error() {
    let (server, desk) = desk().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/topics/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = desk.topics().retrieve(5).await.unwrap_err();

    assert!(err.is_decoding());
    assert!(!err.is_transport());
    let transport = err.transport_error().expect("transport error kept");
    assert!(matches!(transport.kind, TransportKind::Json(_)));
}
