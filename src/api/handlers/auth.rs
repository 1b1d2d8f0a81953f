use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::domain::models::user::{is_registrable_role, User, ROLE_WORKER};
use crate::domain::models::worker_profile::WorkerProfile;
use std::sync::Arc;
use tracing::info;

const MIN_PASSWORD_LEN: usize = 4;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let role = payload.role.trim().to_lowercase();
    let name = payload.name.trim().to_string();
    let contact = payload.contact.trim().to_lowercase();

    if !is_registrable_role(&role) {
        return Err(AppError::Validation("Role must be owner or worker".into()));
    }
    if name.is_empty() || contact.is_empty() {
        return Err(AppError::Validation("Name and contact are required".into()));
    }
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation("Password must be at least 4 characters".into()));
    }

    if state.user_repo.find_by_contact(&contact).await?.is_some() {
        return Err(AppError::Conflict("Contact already registered".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;
    let user = User::new(role, name, contact, password_hash);

    // Worker registration writes the user and a default profile as one unit;
    // the unique contact constraint backstops the pre-check under races.
    let created = if user.role == ROLE_WORKER {
        let profile = WorkerProfile::new(user.id.clone());
        state.user_repo.create_with_profile(&user, &profile).await?
    } else {
        state.user_repo.create(&user).await?
    };

    info!("Registered {} user: {}", created.role, created.id);

    Ok(Json(serde_json::json!({ "user": created })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let contact = payload.contact.trim().to_lowercase();
    if contact.is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation("Contact and password are required".into()));
    }

    // Unknown contact and wrong password collapse into the same 401 so the
    // response never reveals whether an account exists.
    let user = state.user_repo.find_by_contact(&contact).await?
        .ok_or(AppError::Unauthorized)?;

    state.auth_service.verify_password(&user.password_hash, &payload.password)?;

    let token = state.auth_service.issue_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserProfile {
            id: user.id,
            name: user.name,
            contact: user.contact,
            role: user.role,
        },
    }))
}
