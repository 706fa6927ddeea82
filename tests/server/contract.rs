use crate::common::{client_for, fixture, mock_api, mock_bootstrap, setup_server};
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use signup_probe::server::{router, summarize};
use signup_probe::{AvailabilityResult, FailureKind};
use tower::ServiceExt;

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn missing_email_is_a_bad_request() {
    let server = setup_server();
    for uri in ["/check", "/check?email=", "/check?email=%20%20"] {
        let (status, body) = get_json(router(client_for(&server)), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(
            body,
            json!({"status": "error", "message": "Email parameter is required"})
        );
    }
}

#[tokio::test]
async fn taken_email_reports_exists() {
    let server = setup_server();
    let _boot = mock_bootstrap(&server, &fixture("bootstrap_signup.html"), None);
    let _api = mock_api(&server, &fixture("api_taken.json"));

    let (status, body) = get_json(
        router(client_for(&server)),
        "/check?email=someone%40outlook.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "exists",
            "available": false,
            "exists": true,
            "suggestions": ["someone123@outlook.com", "someone2026@outlook.com"]
        })
    );
}

#[tokio::test]
async fn available_email_reports_not_exists() {
    let server = setup_server();
    let _boot = mock_bootstrap(&server, &fixture("bootstrap_signup.html"), None);
    let _api = mock_api(&server, &fixture("api_available.json"));

    let (status, body) = get_json(
        router(client_for(&server)),
        "/check?identifier=fresh@outlook.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "not exists");
    assert_eq!(body["available"], true);
    assert_eq!(body["exists"], false);
}

#[tokio::test]
async fn upstream_error_is_a_bad_gateway() {
    let server = setup_server();
    let _boot = mock_bootstrap(&server, &fixture("bootstrap_signup.html"), None);
    let _api = mock_api(&server, &fixture("api_error.json"));

    let (status, body) = get_json(router(client_for(&server)), "/check?email=x").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"status": "error", "message": "1058"}));
}

#[tokio::test]
async fn health_is_plain_ok() {
    let server = setup_server();
    let resp = router(client_for(&server))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[test]
fn local_failures_are_server_errors() {
    for kind in [
        FailureKind::Transport,
        FailureKind::Decode,
        FailureKind::TokenMissing,
        FailureKind::UnexpectedResponse,
        FailureKind::Config,
    ] {
        let (status, summary) = summarize(&AvailabilityResult::Failed {
            kind,
            reason: "boom".into(),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "kind {kind:?}");
        assert_eq!(summary.status, "error");
        assert_eq!(summary.message.as_deref(), Some("boom"));
        assert!(summary.available.is_none());
    }
}
