use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::ContentStore;
use crate::domain::services::{event_service::EventService, spot_service::SpotService};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub content: Arc<dyn ContentStore>,
    pub event_service: Arc<EventService>,
    pub spot_service: Arc<SpotService>,
}
