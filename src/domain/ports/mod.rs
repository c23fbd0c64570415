use crate::domain::models::{
    activity::Activity, schedule::WeeklySchedule, settings::Settings,
    special_event::SpecialEvent, spot::{Spot, SpotCategory},
};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only source of site content. Tables are returned as shared snapshots with identifiers
/// already normalized.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn settings(&self) -> Result<Arc<Settings>, AppError>;
    async fn activities(&self) -> Result<Arc<Vec<Activity>>, AppError>;
    async fn weekly_schedule(&self) -> Result<Arc<WeeklySchedule>, AppError>;
    async fn special_events(&self) -> Result<Arc<Vec<SpecialEvent>>, AppError>;
    async fn spots(&self, category: SpotCategory) -> Result<Arc<Vec<Spot>>, AppError>;

    /// Drops anything memoized so the next read goes back to the source.
    async fn reload(&self) -> Result<(), AppError> {
        Ok(())
    }
}
