use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{DecisionRequest, JoinRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::membership::{MembershipRequest, STATE_APPROVED, STATE_REJECTED};
use crate::domain::models::user::{ROLE_OWNER, ROLE_WORKER};
use std::sync::Arc;
use tracing::info;

pub async fn request_join(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<JoinRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user.role != ROLE_WORKER {
        return Err(AppError::Forbidden("Only workers can request to join a business".into()));
    }

    if state.business_repo.find_by_id(&payload.business_id).await?.is_none() {
        return Err(AppError::Validation("Unknown business_id".into()));
    }

    // Re-requesting is a no-op that reports the existing request, so a
    // rejected worker cannot reset themselves to pending.
    let request = MembershipRequest::new(payload.business_id, user.id.clone());
    let stored = state.membership_repo.create_if_absent(&request).await?;

    if stored.id == request.id {
        info!("Worker {} requested to join business {}", stored.worker_id, stored.business_id);
    }

    Ok(Json(serde_json::json!({ "request": stored })))
}

pub async fn list_requests(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    if user.role != ROLE_OWNER {
        return Err(AppError::Forbidden("Only owners can review join requests".into()));
    }

    let requests = state.membership_repo.list_pending_for_owner(&user.id).await?;
    Ok(Json(requests))
}

pub async fn decide(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(request_id): Path<String>,
    Json(payload): Json<DecisionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user.role != ROLE_OWNER {
        return Err(AppError::Forbidden("Only owners can decide join requests".into()));
    }

    let verdict = if payload.approve { STATE_APPROVED } else { STATE_REJECTED };

    // Single conditional update: only a pending request owned by this caller
    // transitions. Zero rows means either the request is already settled
    // (report its state, no error) or it is absent/foreign (uniform 404, so
    // other owners' request ids stay unguessable).
    if let Some(updated) = state.membership_repo.settle(&user.id, &request_id, verdict).await? {
        info!("Request {} decided: {}", updated.id, updated.state);
        return Ok(Json(serde_json::json!({ "request": updated })));
    }

    let existing = state.membership_repo.find_for_owner(&user.id, &request_id).await?
        .ok_or(AppError::NotFound("Request not found".into()))?;

    Ok(Json(serde_json::json!({ "request": existing })))
}

pub async fn list_approved_workers(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    if user.role != ROLE_OWNER {
        return Err(AppError::Forbidden("Only owners can list their workers".into()));
    }

    let workers = state.membership_repo.list_approved_for_owner(&user.id).await?;
    Ok(Json(workers))
}
