pub mod activity;
pub mod event_ref;
pub mod schedule;
pub mod scheduled_event;
pub mod settings;
pub mod special_event;
pub mod spot;
