use crate::domain::{
    models::{
        activity::Activity, schedule::WeeklySchedule, settings::Settings,
        special_event::SpecialEvent, spot::{Spot, SpotCategory},
    },
    ports::ContentStore,
};
use crate::error::AppError;
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use tokio::sync::OnceCell;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    /// Load each table on first use and keep it until `reload`.
    LoadOnce,
    /// Always read through to the inner store.
    None,
}

impl FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "load_once" => Ok(CachePolicy::LoadOnce),
            "none" => Ok(CachePolicy::None),
            _ => Err(format!("Unknown cache policy '{}'", s)),
        }
    }
}

// One generation of memoized tables. `reload` swaps in a fresh generation; callers holding
// the old one finish against it.
#[derive(Default)]
struct Tables {
    settings: OnceCell<Arc<Settings>>,
    activities: OnceCell<Arc<Vec<Activity>>>,
    schedule: OnceCell<Arc<WeeklySchedule>>,
    special_events: OnceCell<Arc<Vec<SpecialEvent>>>,
    spots: [OnceCell<Arc<Vec<Spot>>>; 5], // indexed by SpotCategory::index
}

pub struct CachedContentStore {
    inner: Arc<dyn ContentStore>,
    policy: CachePolicy,
    tables: RwLock<Arc<Tables>>,
}

impl CachedContentStore {
    pub fn new(inner: Arc<dyn ContentStore>, policy: CachePolicy) -> Self {
        Self {
            inner,
            policy,
            tables: RwLock::new(Arc::new(Tables::default())),
        }
    }

    fn generation(&self) -> Result<Arc<Tables>, AppError> {
        self.tables.read()
            .map(|t| Arc::clone(&t))
            .map_err(|_| AppError::InternalWithMsg("content cache lock poisoned".into()))
    }
}

#[async_trait]
impl ContentStore for CachedContentStore {
    async fn settings(&self) -> Result<Arc<Settings>, AppError> {
        if self.policy == CachePolicy::None {
            return self.inner.settings().await;
        }
        let tables = self.generation()?;
        let settings = tables.settings.get_or_try_init(|| self.inner.settings()).await?;
        Ok(Arc::clone(settings))
    }

    async fn activities(&self) -> Result<Arc<Vec<Activity>>, AppError> {
        if self.policy == CachePolicy::None {
            return self.inner.activities().await;
        }
        let tables = self.generation()?;
        let activities = tables.activities.get_or_try_init(|| self.inner.activities()).await?;
        Ok(Arc::clone(activities))
    }

    async fn weekly_schedule(&self) -> Result<Arc<WeeklySchedule>, AppError> {
        if self.policy == CachePolicy::None {
            return self.inner.weekly_schedule().await;
        }
        let tables = self.generation()?;
        let schedule = tables.schedule.get_or_try_init(|| self.inner.weekly_schedule()).await?;
        Ok(Arc::clone(schedule))
    }

    async fn special_events(&self) -> Result<Arc<Vec<SpecialEvent>>, AppError> {
        if self.policy == CachePolicy::None {
            return self.inner.special_events().await;
        }
        let tables = self.generation()?;
        let events = tables.special_events.get_or_try_init(|| self.inner.special_events()).await?;
        Ok(Arc::clone(events))
    }

    async fn spots(&self, category: SpotCategory) -> Result<Arc<Vec<Spot>>, AppError> {
        if self.policy == CachePolicy::None {
            return self.inner.spots(category).await;
        }
        let tables = self.generation()?;
        let cell = &tables.spots[category.index()];
        if cell.initialized() {
            debug!("Spot cache hit for {}", category);
        }
        let spots = cell.get_or_try_init(|| self.inner.spots(category)).await?;
        Ok(Arc::clone(spots))
    }

    async fn reload(&self) -> Result<(), AppError> {
        {
            let mut tables = self.tables.write()
                .map_err(|_| AppError::InternalWithMsg("content cache lock poisoned".into()))?;
            *tables = Arc::new(Tables::default());
        }
        info!("Content cache cleared");
        self.inner.reload().await
    }
}
