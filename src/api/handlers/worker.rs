use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{SetStatusRequest, UpdateProfileRequest, WorkerListQuery};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::ROLE_WORKER;
use crate::domain::models::worker_profile::{is_valid_status, WorkerProfile};
use std::sync::Arc;
use tracing::info;

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user.role != ROLE_WORKER {
        return Err(AppError::Forbidden("Only workers have a profile".into()));
    }

    // Upsert: registration normally creates the row, but an absent one is
    // recreated here rather than failing. Unspecified fields keep their
    // stored values; status is never changed by this call.
    let profile = match state.profile_repo.find_by_user(&user.id).await? {
        Some(mut existing) => {
            if let Some(skills) = payload.skills {
                existing.skills = skills;
            }
            if let Some(experience_years) = payload.experience_years {
                existing.experience_years = experience_years;
            }
            if let Some(location) = payload.location {
                existing.location = location;
            }
            state.profile_repo.update(&existing).await?
        }
        None => {
            let mut fresh = WorkerProfile::new(user.id.clone());
            fresh.skills = payload.skills.unwrap_or_default();
            fresh.experience_years = payload.experience_years.unwrap_or(0);
            fresh.location = payload.location.unwrap_or_default();
            state.profile_repo.create(&fresh).await?
        }
    };

    info!("Updated profile for worker {}", user.id);

    Ok(Json(serde_json::json!({ "profile": profile })))
}

pub async fn set_status(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<SetStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user.role != ROLE_WORKER {
        return Err(AppError::Forbidden("Only workers have an availability status".into()));
    }

    let status = payload.status.trim().to_lowercase();
    if !is_valid_status(&status) {
        return Err(AppError::Validation("Status must be pending, ready or busy".into()));
    }

    let profile = state.profile_repo.set_status(&user.id, &status).await?
        .ok_or(AppError::NotFound("Worker profile not found".into()))?;

    info!("Worker {} set status to {}", user.id, profile.status);

    Ok(Json(serde_json::json!({ "profile": profile })))
}

pub async fn list_workers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WorkerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = match &query.status {
        Some(s) if !s.is_empty() => {
            if !is_valid_status(s) {
                return Err(AppError::Validation("Status must be pending, ready or busy".into()));
            }
            Some(s.as_str())
        }
        _ => None,
    };
    let business_id = query.business_id.as_deref().filter(|b| !b.is_empty());

    let workers = state.profile_repo.list_workers(status, business_id).await?;
    Ok(Json(workers))
}
