use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::RateWorkerRequest;
use crate::domain::models::rating::Rating;
use crate::domain::models::user::ROLE_WORKER;
use std::sync::Arc;
use tracing::info;

pub async fn rate_worker(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RateWorkerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=5).contains(&payload.stars) {
        return Err(AppError::Validation("Stars must be between 1 and 5".into()));
    }

    let target = state.user_repo.find_by_id(&payload.worker_id).await?;
    match target {
        Some(user) if user.role == ROLE_WORKER => {}
        _ => return Err(AppError::NotFound("Worker not found".into())),
    }

    let rating = Rating::new(
        payload.worker_id,
        payload.stars,
        payload.comment.unwrap_or_default().trim().to_string(),
    );
    let created = state.rating_repo.create(&rating).await?;

    info!("Rated worker {}: {} stars", created.worker_id, created.stars);

    Ok(Json(serde_json::json!({ "rating": created })))
}
