use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{parse_days, parse_from_date},
    responses::{EventDetailResponse, EventIdsResponse},
};
use crate::domain::services::event_service::DEFAULT_WINDOW_DAYS;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

pub async fn list_upcoming_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let days = parse_days(&params, DEFAULT_WINDOW_DAYS, state.config.max_window_days)?;

    let events = match parse_from_date(&params)? {
        Some(from) => state.event_service.build_schedule(days, from).await?,
        None => state.event_service.upcoming_events(days).await?,
    };

    info!("Serving {} events for a {} day window", events.len(), days);
    Ok(Json(events))
}

pub async fn list_event_ids(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let ids = state.event_service.all_event_ids().await?;
    Ok(Json(EventIdsResponse { ids }))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_service.resolve(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))?;

    Ok(Json(EventDetailResponse {
        is_recurring: event.is_recurring,
        event,
    }))
}
