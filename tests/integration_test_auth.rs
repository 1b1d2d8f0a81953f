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
async fn test_health_check() {
    let app = TestApp::new().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(Body::empty()).unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["db"], json!(true));
}

#[tokio::test]
async fn test_register_login_roundtrip() {
    let app = TestApp::new().await;

    for (role, contact) in [("owner", "olga@example.com"), ("worker", "wim@example.com")] {
        let user = app.register(role, "Test User", contact, "s3cret").await;
        assert_eq!(user["user"]["role"].as_str().unwrap(), role);
        assert_eq!(user["user"]["contact"].as_str().unwrap(), contact);
        assert!(user["user"]["password_hash"].is_null());

        let token = app.login(contact, "s3cret").await;
        assert!(!token.is_empty());
    }
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    let cases = [
        json!({"role": "admin", "name": "A", "contact": "a@example.com", "password": "s3cret"}),
        json!({"role": "boss", "name": "A", "contact": "b@example.com", "password": "s3cret"}),
        json!({"role": "owner", "name": "", "contact": "c@example.com", "password": "s3cret"}),
        json!({"role": "owner", "name": "A", "contact": "", "password": "s3cret"}),
        json!({"role": "owner", "name": "A", "contact": "d@example.com", "password": "abc"}),
    ];

    for payload in cases {
        let response = app.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string())).unwrap(),
        ).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload should be rejected");
    }
}

#[tokio::test]
async fn test_duplicate_contact_conflict() {
    let app = TestApp::new().await;

    app.register("worker", "First", "dup@example.com", "s3cret").await;

    // Same contact, different role and fields: still a conflict.
    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "role": "owner", "name": "Second", "contact": "dup@example.com", "password": "other1"
            }).to_string())).unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_does_not_leak_account_existence() {
    let app = TestApp::new().await;

    app.register("worker", "Wim", "wim@example.com", "s3cret").await;

    let unknown = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"contact": "ghost@example.com", "password": "s3cret"}).to_string())).unwrap(),
    ).await.unwrap();

    let wrong_password = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"contact": "wim@example.com", "password": "wrong1"}).to_string())).unwrap(),
    ).await.unwrap();

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    // Identical error body for both failure modes.
    let body_unknown = parse_body(unknown).await;
    let body_wrong = parse_body(wrong_password).await;
    assert_eq!(body_unknown, body_wrong);
}

#[tokio::test]
async fn test_seed_admin_is_idempotent() {
    let app = TestApp::new().await;

    // TestApp::new already seeded once; seeding again must not duplicate.
    workhub_backend::infra::factory::ensure_seed_admin(&app.state)
        .await
        .unwrap();

    let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'admin'")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(admins, 1);

    let token = app.login("admin@workhub.local", "admin123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_worker_registration_creates_pending_profile() {
    let app = TestApp::new().await;

    let user = app.register("worker", "Wim", "wim@example.com", "s3cret").await;
    let user_id = user["user"]["id"].as_str().unwrap();

    let status: String = sqlx::query_scalar("SELECT status FROM worker_profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(status, "pending");

    // Owner registration creates no profile row.
    let owner = app.register("owner", "Olga", "olga@example.com", "s3cret").await;
    let profiles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM worker_profiles WHERE user_id = ?")
        .bind(owner["user"]["id"].as_str().unwrap())
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(profiles, 0);
}

#[tokio::test]
async fn test_protected_routes_require_valid_token() {
    let app = TestApp::new().await;

    let no_token = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/owner/businesses")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Shop"}).to_string())).unwrap(),
    ).await.unwrap();
    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);

    let garbage_token = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/owner/businesses")
            .header(header::AUTHORIZATION, "Bearer not-a-jwt")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Shop"}).to_string())).unwrap(),
    ).await.unwrap();
    assert_eq!(garbage_token.status(), StatusCode::UNAUTHORIZED);
}
