use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn reload_content(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    state.content.reload().await?;
    info!("Content reload requested");
    Ok(Json(serde_json::json!({"status": "reloaded"})))
}
