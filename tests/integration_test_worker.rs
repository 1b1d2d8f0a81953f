mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_profile_update_preserves_unspecified_fields() {
    let app = TestApp::new().await;

    app.register("worker", "Wim", "wim@example.com", "s3cret").await;
    let token = app.login("wim@example.com", "s3cret").await;

    let first = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/worker/profile")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "skills": "plumbing", "experience_years": 5
            }).to_string())).unwrap(),
    ).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    // Only location this time; skills and experience must survive.
    let second = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/worker/profile")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"location": "Hamburg"}).to_string())).unwrap(),
    ).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let body = parse_body(second).await;
    assert_eq!(body["profile"]["skills"], json!("plumbing"));
    assert_eq!(body["profile"]["experience_years"], json!(5));
    assert_eq!(body["profile"]["location"], json!("Hamburg"));
    assert_eq!(body["profile"]["status"], json!("pending"));
}

#[tokio::test]
async fn test_profile_endpoints_forbidden_for_owners() {
    let app = TestApp::new().await;

    app.register("owner", "Olga", "olga@example.com", "s3cret").await;
    let token = app.login("olga@example.com", "s3cret").await;

    let profile = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/worker/profile")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"skills": "managing"}).to_string())).unwrap(),
    ).await.unwrap();
    assert_eq!(profile.status(), StatusCode::FORBIDDEN);

    let status = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/worker/status")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "ready"}).to_string())).unwrap(),
    ).await.unwrap();
    assert_eq!(status.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_set_status_transitions_and_validation() {
    let app = TestApp::new().await;

    app.register("worker", "Wim", "wim@example.com", "s3cret").await;
    let token = app.login("wim@example.com", "s3cret").await;

    let invalid = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/worker/status")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"status": "vacationing"}).to_string())).unwrap(),
    ).await.unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

    for status in ["ready", "busy", "pending"] {
        let response = app.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/worker/status")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"status": status}).to_string())).unwrap(),
        ).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_body(response).await;
        assert_eq!(body["profile"]["status"].as_str().unwrap(), status);
    }
}
