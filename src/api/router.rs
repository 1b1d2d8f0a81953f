use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, business, health, membership, rating, worker};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))

        // Auth
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))

        // Public browsing
        .route("/api/businesses", get(business::list_businesses))
        .route("/api/workers", get(worker::list_workers))
        .route("/api/rate", post(rating::rate_worker))

        // Owner
        .route("/api/owner/businesses", post(business::create_business))
        .route("/api/owner/requests", get(membership::list_requests))
        .route("/api/owner/requests/{request_id}/decision", post(membership::decide))
        .route("/api/owner/workers", get(membership::list_approved_workers))

        // Worker
        .route("/api/worker/profile", post(worker::update_profile))
        .route("/api/worker/status", post(worker::set_status))
        .route("/api/worker/join", post(membership::request_join))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
