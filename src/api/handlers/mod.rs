pub mod admin;
pub mod event;
pub mod health;
pub mod settings;
pub mod spot;
pub mod tour;
