use std::collections::BTreeMap;
use std::sync::Arc;
use crate::domain::{
    models::spot::{Spot, SpotCategory},
    ports::ContentStore,
};
use crate::error::AppError;

pub struct SpotService {
    content: Arc<dyn ContentStore>,
}

impl SpotService {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }

    pub async fn get_spots(&self, category: SpotCategory) -> Result<Arc<Vec<Spot>>, AppError> {
        self.content.spots(category).await
    }

    pub async fn get_spot_by_id(&self, category: SpotCategory, id: &str) -> Result<Option<Spot>, AppError> {
        let spots = self.content.spots(category).await?;
        Ok(spots.iter().find(|s| s.id == id).cloned())
    }

    pub async fn get_all_spots(&self) -> Result<BTreeMap<SpotCategory, Arc<Vec<Spot>>>, AppError> {
        let (restaurants, laundry, transport, bars, activities) = tokio::try_join!(
            self.content.spots(SpotCategory::Restaurants),
            self.content.spots(SpotCategory::Laundry),
            self.content.spots(SpotCategory::Transport),
            self.content.spots(SpotCategory::Bars),
            self.content.spots(SpotCategory::Activities),
        )?;

        Ok(BTreeMap::from([
            (SpotCategory::Restaurants, restaurants),
            (SpotCategory::Laundry, laundry),
            (SpotCategory::Transport, transport),
            (SpotCategory::Bars, bars),
            (SpotCategory::Activities, activities),
        ]))
    }

    /// Searches every category in `SpotCategory::ALL` order.
    pub async fn find_spot_by_id(&self, id: &str) -> Result<Option<(Spot, SpotCategory)>, AppError> {
        let all = self.get_all_spots().await?;
        for category in SpotCategory::ALL {
            if let Some(spot) = all.get(&category).and_then(|spots| spots.iter().find(|s| s.id == id)) {
                return Ok(Some((spot.clone(), category)));
            }
        }
        Ok(None)
    }
}
