use crate::domain::{
    models::{
        activity::Activity, schedule::WeeklySchedule, settings::Settings,
        special_event::SpecialEvent, spot::{Spot, SpotCategory},
    },
    ports::ContentStore,
    services::slug::normalize,
};
use crate::error::AppError;
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

const SETTINGS_FILE: &str = "settings.json";
const ACTIVITIES_FILE: &str = "activities.json";
const SCHEDULE_FILE: &str = "schedule.json";
const SPECIAL_EVENTS_FILE: &str = "special-events.json";

#[derive(Deserialize)]
struct ActivitiesFile {
    activities: Vec<Activity>,
}

#[derive(Deserialize)]
struct ScheduleFile {
    schedule: WeeklySchedule,
}

#[derive(Deserialize)]
struct SpecialEventsFile {
    events: Vec<SpecialEvent>,
}

#[derive(Deserialize)]
struct SpotsFile {
    spots: Vec<Spot>,
}

/// Reads content tables from JSON files under a content directory. Every call hits the disk;
/// wrap it in a `CachedContentStore` for memoization.
pub struct JsonContentRepo {
    root: PathBuf,
}

impl JsonContentRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn spots_file(category: SpotCategory) -> String {
        format!("spots/{}.json", category.slug())
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, AppError> {
        let bytes = tokio::fs::read(self.root.join(file)).await?;
        let parsed = serde_json::from_slice(&bytes).map_err(|e| AppError::malformed(file, e))?;
        info!("Loaded content file {}", file);
        Ok(parsed)
    }
}

fn warn_duplicate_ids<'a>(file: &str, ids: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            warn!("Duplicate id '{}' in {}, only the first entry is reachable", id, file);
        }
    }
}

#[async_trait]
impl ContentStore for JsonContentRepo {
    async fn settings(&self) -> Result<Arc<Settings>, AppError> {
        let settings: Settings = self.read_json(SETTINGS_FILE).await?;
        Ok(Arc::new(settings))
    }

    async fn activities(&self) -> Result<Arc<Vec<Activity>>, AppError> {
        let file: ActivitiesFile = self.read_json(ACTIVITIES_FILE).await?;
        let activities: Vec<Activity> = file.activities.into_iter()
            .map(|mut a| {
                a.id = normalize(&a.id, &a.details.title);
                a
            })
            .collect();

        warn_duplicate_ids(ACTIVITIES_FILE, activities.iter().map(|a| a.id.as_str()));
        Ok(Arc::new(activities))
    }

    async fn weekly_schedule(&self) -> Result<Arc<WeeklySchedule>, AppError> {
        let file: ScheduleFile = self.read_json(SCHEDULE_FILE).await?;
        if let Some((weekday, activity_id)) = file.schedule.repeated_slot() {
            return Err(AppError::malformed(
                SCHEDULE_FILE,
                format!("activity '{}' is scheduled more than once on {}", activity_id, weekday),
            ));
        }
        Ok(Arc::new(file.schedule))
    }

    async fn special_events(&self) -> Result<Arc<Vec<SpecialEvent>>, AppError> {
        let file: SpecialEventsFile = self.read_json(SPECIAL_EVENTS_FILE).await?;
        let events: Vec<SpecialEvent> = file.events.into_iter()
            .map(|mut e| {
                e.id = normalize(&e.id, &e.details.title);
                e
            })
            .collect();

        warn_duplicate_ids(SPECIAL_EVENTS_FILE, events.iter().map(|e| e.id.as_str()));
        Ok(Arc::new(events))
    }

    async fn spots(&self, category: SpotCategory) -> Result<Arc<Vec<Spot>>, AppError> {
        let file_name = Self::spots_file(category);
        let file: SpotsFile = match self.read_json(&file_name).await {
            Ok(file) => file,
            Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                info!("No spot file for category {}, treating as empty", category);
                SpotsFile { spots: Vec::new() }
            }
            Err(e) => return Err(e),
        };

        let spots: Vec<Spot> = file.spots.into_iter()
            .map(|mut s| {
                s.id = normalize(&s.id, &s.name);
                s
            })
            .collect();

        warn_duplicate_ids(&file_name, spots.iter().map(|s| s.id.as_str()));
        Ok(Arc::new(spots))
    }
}
