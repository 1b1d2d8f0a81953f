use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::CreateBusinessRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::business::Business;
use crate::domain::models::user::ROLE_OWNER;
use std::sync::Arc;
use tracing::info;

pub async fn create_business(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user.role != ROLE_OWNER {
        return Err(AppError::Forbidden("Only owners can create businesses".into()));
    }

    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Business name is required".into()));
    }

    let business = Business::new(
        user.id,
        name,
        payload.category.unwrap_or_default().trim().to_string(),
        payload.location.unwrap_or_default().trim().to_string(),
    );
    let created = state.business_repo.create(&business).await?;

    info!("Created business {} for owner {}", created.id, created.owner_id);

    Ok(Json(serde_json::json!({ "business": created })))
}

pub async fn list_businesses(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let businesses = state.business_repo.list().await?;
    Ok(Json(businesses))
}
