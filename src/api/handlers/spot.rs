use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::parse_origin, responses::FoundSpotResponse};
use crate::domain::models::spot::{SpotCategory, CATEGORIES};
use crate::domain::services::distance::annotate_spots;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;

fn parse_category(raw: &str) -> Result<SpotCategory, AppError> {
    raw.parse().map_err(AppError::NotFound)
}

pub async fn list_categories() -> impl IntoResponse {
    Json(&CATEGORIES)
}

pub async fn list_spots(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let category = parse_category(&category)?;
    let origin = parse_origin(&params)?;

    let spots = state.spot_service.get_spots(category).await?;
    Ok(Json(annotate_spots(&spots, origin)))
}

pub async fn get_spot(
    State(state): State<Arc<AppState>>,
    Path((category, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let category = parse_category(&category)?;
    let spot = state.spot_service.get_spot_by_id(category, &id).await?
        .ok_or_else(|| AppError::NotFound(format!("Spot '{}' not found in {}", id, category)))?;
    Ok(Json(spot))
}

pub async fn find_spot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (spot, category) = state.spot_service.find_spot_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Spot '{}' not found", id)))?;
    Ok(Json(FoundSpotResponse { spot, category }))
}
