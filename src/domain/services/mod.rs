pub mod distance;
pub mod event_service;
pub mod install_prompt;
pub mod resolver;
pub mod schedule;
pub mod slug;
pub mod spot_service;
pub mod tour;
