use std::env;
use std::path::PathBuf;

use crate::infra::cache::CachePolicy;

#[derive(Clone, Debug)]
pub struct Config {
    pub content_dir: PathBuf,
    pub port: u16,
    pub cache_policy: CachePolicy,
    pub max_window_days: u32, // Upper bound for ?days= on the event feed
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            content_dir: env::var("CONTENT_DIR").unwrap_or_else(|_| "./content".to_string()).into(),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            cache_policy: env::var("CONTENT_CACHE")
                .unwrap_or_else(|_| "load_once".to_string())
                .parse()
                .expect("CONTENT_CACHE must be 'load_once' or 'none'"),
            max_window_days: env::var("MAX_WINDOW_DAYS").unwrap_or_else(|_| "90".to_string()).parse().expect("MAX_WINDOW_DAYS must be a number"),
            export_dir: env::var("EXPORT_DIR").unwrap_or_else(|_| "./dist/events".to_string()).into(),
        }
    }
}
