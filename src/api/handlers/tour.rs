use axum::{extract::{Path, Query}, response::IntoResponse, Json};
use crate::api::dtos::responses::TourResponse;
use crate::domain::services::tour::{TourOptions, TourPage, TourProgress};
use crate::error::AppError;
use std::collections::HashMap;

/// Steps the onboarding tour should show on a page for the caller's stored progress.
pub async fn get_tour_steps(
    Path(page): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let page: TourPage = page.parse().map_err(AppError::NotFound)?;

    let current_step = match params.get("step") {
        Some(raw) => raw.parse().map_err(|_| AppError::Validation("Invalid step".into()))?,
        None => 0,
    };
    let completed = match params.get("completed").map(String::as_str) {
        Some("true") => true,
        Some("false") | None => false,
        Some(_) => return Err(AppError::Validation("completed must be true or false".into())),
    };

    let progress = TourProgress { current_step, completed };
    let options = TourOptions {
        hostel_name: params.get("hostelName").cloned(),
        first_spot_url: params.get("firstSpotUrl").cloned(),
    };

    let steps = progress.steps_for_page(page, &options).unwrap_or_default();
    Ok(Json(TourResponse { active: !steps.is_empty(), steps }))
}
