use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    state.health_probe.ping().await?;
    Ok(Json(serde_json::json!({ "ok": true, "db": true })))
}
