use serde::Serialize;
use crate::domain::models::{scheduled_event::ScheduledEvent, spot::{Spot, SpotCategory}};
use crate::domain::services::tour::PlannedStep;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub event: ScheduledEvent,
    pub is_recurring: bool,
}

#[derive(Serialize)]
pub struct EventIdsResponse {
    pub ids: Vec<String>,
}

#[derive(Serialize)]
pub struct FoundSpotResponse {
    pub spot: Spot,
    pub category: SpotCategory,
}

#[derive(Serialize)]
pub struct TourResponse {
    pub active: bool,
    pub steps: Vec<PlannedStep>,
}
