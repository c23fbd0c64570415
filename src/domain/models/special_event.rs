use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::models::activity::EventDetails;
use crate::domain::models::schedule::TimeRange;

/// A one-off event pinned to a calendar date.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpecialEvent {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub times: TimeRange,
    #[serde(flatten)]
    pub details: EventDetails,
}
