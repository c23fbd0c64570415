use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::ContentStore;
use crate::domain::services::{event_service::EventService, spot_service::SpotService};
use crate::infra::cache::CachedContentStore;
use crate::infra::repositories::json_content_repo::JsonContentRepo;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> AppState {
    info!(
        "Serving content from {} (cache policy: {:?})",
        config.content_dir.display(),
        config.cache_policy
    );

    let repo: Arc<dyn ContentStore> = Arc::new(JsonContentRepo::new(config.content_dir.clone()));
    let content: Arc<dyn ContentStore> = Arc::new(CachedContentStore::new(repo, config.cache_policy));

    state_from_store(config, content)
}

/// Wires services around an already constructed store.
pub fn state_from_store(config: &Config, content: Arc<dyn ContentStore>) -> AppState {
    AppState {
        config: config.clone(),
        event_service: Arc::new(EventService::new(content.clone())),
        spot_service: Arc::new(SpotService::new(content.clone())),
        content,
    }
}
