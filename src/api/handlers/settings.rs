use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = state.content.settings().await?;
    Ok(Json(settings.as_ref().clone()))
}
