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
async fn test_owner_creates_business() {
    let app = TestApp::new().await;

    app.register("owner", "Olga", "olga@example.com", "s3cret").await;
    let token = app.login("olga@example.com", "s3cret").await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/owner/businesses")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Olga's Bakery", "category": "food", "location": "Berlin"
            }).to_string())).unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["business"]["name"], json!("Olga's Bakery"));
    assert_eq!(body["business"]["category"], json!("food"));
    assert!(!body["business"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_business_creation_requires_owner_role() {
    let app = TestApp::new().await;

    app.register("worker", "Wim", "wim@example.com", "s3cret").await;
    let token = app.login("wim@example.com", "s3cret").await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/owner/businesses")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Sneaky Shop"}).to_string())).unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_business_name_required() {
    let app = TestApp::new().await;

    app.register("owner", "Olga", "olga@example.com", "s3cret").await;
    let token = app.login("olga@example.com", "s3cret").await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/owner/businesses")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "   "}).to_string())).unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_businesses_newest_first_with_owner_name() {
    let app = TestApp::new().await;

    app.register("owner", "Olga", "olga@example.com", "s3cret").await;
    let token = app.login("olga@example.com", "s3cret").await;

    for name in ["First Shop", "Second Shop"] {
        let response = app.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/owner/businesses")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"name": name}).to_string())).unwrap(),
        ).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri("/api/businesses")
            .body(Body::empty()).unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let listings = parse_body(response).await;
    let listings = listings.as_array().unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0]["name"], json!("Second Shop"));
    assert_eq!(listings[1]["name"], json!("First Shop"));
    assert_eq!(listings[0]["owner_name"], json!("Olga"));
}
