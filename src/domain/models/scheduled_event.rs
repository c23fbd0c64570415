use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::models::activity::{Activity, EventDetails};
use crate::domain::models::event_ref::EventRef;
use crate::domain::models::schedule::TimeRange;
use crate::domain::models::special_event::SpecialEvent;

/// One entry of the unified event feed, derived from an activity occurrence or a special event.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub id: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub times: TimeRange,
    #[serde(flatten)]
    pub details: EventDetails,
    pub is_recurring: bool,
    pub source_id: String,
}

impl ScheduledEvent {
    pub fn occurrence(activity: &Activity, date: NaiveDate, times: TimeRange) -> Self {
        Self {
            id: EventRef::recurring(activity.id.as_str(), date).to_string(),
            date,
            times,
            details: activity.details.clone(),
            is_recurring: true,
            source_id: activity.id.clone(),
        }
    }

    pub fn special(event: &SpecialEvent) -> Self {
        Self {
            id: EventRef::special(event.id.as_str()).to_string(),
            date: event.date,
            times: event.times,
            details: event.details.clone(),
            is_recurring: false,
            source_id: event.id.clone(),
        }
    }
}
