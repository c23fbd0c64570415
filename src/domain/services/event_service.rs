use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, warn};
use crate::domain::{
    models::scheduled_event::ScheduledEvent,
    ports::ContentStore,
    services::{resolver::resolve_event, schedule::build_schedule},
};
use crate::error::AppError;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const ENUMERATION_WINDOW_DAYS: u32 = 30;

/// Event feed operations over a content store.
pub struct EventService {
    content: Arc<dyn ContentStore>,
}

impl EventService {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }

    /// Current date in the hostel's timezone.
    pub async fn today(&self) -> Result<NaiveDate, AppError> {
        let settings = self.content.settings().await?;
        let tz: Tz = settings.timezone.parse().unwrap_or_else(|_| {
            warn!("Unknown timezone '{}', using UTC", settings.timezone);
            chrono_tz::UTC
        });
        Ok(Utc::now().with_timezone(&tz).date_naive())
    }

    pub async fn build_schedule(&self, window_days: u32, today: NaiveDate) -> Result<Vec<ScheduledEvent>, AppError> {
        let (activities, schedule, special_events) = tokio::try_join!(
            self.content.activities(),
            self.content.weekly_schedule(),
            self.content.special_events(),
        )?;

        let events = build_schedule(&activities, &schedule, &special_events, window_days, today);
        debug!("Built {} events for {} days from {}", events.len(), window_days, today);
        Ok(events)
    }

    pub async fn upcoming_events(&self, days: u32) -> Result<Vec<ScheduledEvent>, AppError> {
        let today = self.today().await?;
        self.build_schedule(days, today).await
    }

    pub async fn resolve(&self, display_id: &str) -> Result<Option<ScheduledEvent>, AppError> {
        let (activities, schedule, special_events) = tokio::try_join!(
            self.content.activities(),
            self.content.weekly_schedule(),
            self.content.special_events(),
        )?;

        let event = resolve_event(display_id, &activities, &schedule, &special_events);
        if event.is_none() {
            info!("No event found for id '{}'", display_id);
        }
        Ok(event)
    }

    pub async fn resolve_all(&self, window_days: u32, today: NaiveDate) -> Result<Vec<String>, AppError> {
        let events = self.build_schedule(window_days, today).await?;
        Ok(events.into_iter().map(|e| e.id).collect())
    }

    /// Every id a detail page should exist for, over the enumeration window.
    pub async fn all_event_ids(&self) -> Result<Vec<String>, AppError> {
        let today = self.today().await?;
        self.resolve_all(ENUMERATION_WINDOW_DAYS, today).await
    }
}
