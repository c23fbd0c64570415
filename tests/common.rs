use hostel_guide::{
    api::router::create_router,
    config::Config,
    domain::models::{
        activity::Activity, schedule::WeeklySchedule, settings::Settings,
        special_event::SpecialEvent, spot::{Spot, SpotCategory},
    },
    domain::ports::ContentStore,
    error::AppError,
    infra::{cache::CachePolicy, factory::bootstrap_state},
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;
use uuid::Uuid;

pub fn settings_json() -> Value {
    json!({
        "hostelName": "Lazy Gecko Hostel",
        "logo": "/logo.png",
        "primaryColor": "#0f766e",
        "accentColor": "#f59e0b",
        "wifi": {"name": "LazyGecko", "password": "sleepwell"},
        "checkIn": "14:00",
        "checkOut": "11:00",
        "contactWhatsApp": "+66800000000",
        "emergencyContacts": [{"name": "Tourist Police", "phone": "1155"}],
        "timezone": "Asia/Bangkok"
    })
}

pub fn activities_json() -> Value {
    json!({
        "activities": [
            {
                "id": "yoga",
                "title": "Morning Yoga",
                "tagline": "Start the day slow",
                "description": "Rooftop yoga with Nok.",
                "type": "activities",
                "location": "Rooftop",
                "lat": 13.7563,
                "lng": 100.5018,
                "image": null,
                "price": "Free",
                "cta": null
            },
            {
                "title": "Thai Cooking Class",
                "tagline": "Cook your own pad thai",
                "description": "Market tour and class.",
                "type": "food",
                "location": "Kitchen",
                "price": "400 THB",
                "cta": {"type": "whatsapp", "label": "Book", "url": "+66800000000", "message": "Cooking class please"}
            },
            {
                "title": "Beer Pong Night",
                "tagline": "Bring your A game",
                "description": "",
                "type": "bars",
                "location": "Bar",
                "cta": {"type": "link", "label": "Rules", "url": "https://example.com/rules"}
            }
        ]
    })
}

pub fn schedule_json() -> Value {
    json!({
        "schedule": {
            "monday": [
                {"activityId": "yoga", "startTime": "07:30", "endTime": "08:15"},
                {"activityId": "deleted-activity", "startTime": "12:00", "endTime": "13:00"}
            ],
            "wednesday": [
                {"activityId": "thai-cooking-class", "startTime": "16:00", "endTime": "18:00"},
                {"activityId": "yoga", "startTime": "07:30", "endTime": "08:15"}
            ],
            "friday": [
                {"activityId": "beer-pong-night", "startTime": null, "endTime": null}
            ],
            "sunday": []
        }
    })
}

pub fn special_events_json() -> Value {
    json!({
        "events": [
            {
                "id": "full-moon-party",
                "title": "Full Moon Party",
                "tagline": "Glow paint provided",
                "description": "Boat leaves at sunset.",
                "type": "bars",
                "date": "2025-06-02",
                "startTime": null,
                "endTime": null,
                "location": "Pier 3",
                "price": "800 THB",
                "cta": null
            },
            {
                "title": "Songkran Splash",
                "tagline": "Bring a water gun",
                "description": "",
                "type": "activities",
                "date": "2025-06-04",
                "startTime": "10:00",
                "endTime": "18:00",
                "location": "Street",
                "price": null,
                "cta": null
            }
        ]
    })
}

pub fn restaurants_json() -> Value {
    json!({
        "spots": [
            {
                "name": "Jay Fai",
                "description": "Crab omelette, long queue.",
                "cuisineType": "thai",
                "priceRange": "€€€",
                "coordinates": {"lat": 13.7527, "lng": 100.5048},
                "openingHours": {"default": "09:00-19:00", "exceptions": {"sunday": "closed"}},
                "tags": ["michelin"]
            },
            {
                "id": "noodle-corner",
                "name": "Noodle Corner",
                "description": "Boat noodles.",
                "openingHours": "08:00-15:00"
            }
        ]
    })
}

pub fn bars_json() -> Value {
    json!({
        "spots": [
            {
                "name": "Sky Bar",
                "description": "Rooftop cocktails.",
                "barType": "rooftop",
                "location": {"lat": 13.7217, "lng": 100.5168}
            }
        ]
    })
}

pub fn default_files() -> Vec<(&'static str, Value)> {
    vec![
        ("settings.json", settings_json()),
        ("activities.json", activities_json()),
        ("schedule.json", schedule_json()),
        ("special-events.json", special_events_json()),
        ("spots/restaurants.json", restaurants_json()),
        ("spots/bars.json", bars_json()),
    ]
}

pub fn test_config(content_dir: PathBuf, cache_policy: CachePolicy) -> Config {
    Config {
        export_dir: content_dir.join("dist"),
        content_dir,
        port: 0,
        cache_policy,
        max_window_days: 90,
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub content_dir: PathBuf,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_files(default_files(), CachePolicy::LoadOnce).await
    }

    pub async fn with_files(files: Vec<(&str, Value)>, cache_policy: CachePolicy) -> Self {
        let content_dir = std::env::temp_dir().join(format!("hostel_guide_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(content_dir.join("spots")).expect("Failed to create content dir");

        let app = Self::from_dir(content_dir, cache_policy);
        for (name, value) in files {
            app.write_file(name, &value);
        }
        app
    }

    fn from_dir(content_dir: PathBuf, cache_policy: CachePolicy) -> Self {
        let config = test_config(content_dir.clone(), cache_policy);
        let state = Arc::new(bootstrap_state(&config));
        let router = create_router(state.clone());

        Self { router, content_dir, state }
    }

    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, value: &Value) {
        std::fs::write(self.content_dir.join(name), value.to_string()).expect("Failed to write content file");
    }

    #[allow(dead_code)]
    pub fn write_raw(&self, name: &str, body: &str) {
        std::fs::write(self.content_dir.join(name), body).expect("Failed to write content file");
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
    }

    #[allow(dead_code)]
    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, body)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.content_dir);
    }
}

/// In-memory store that counts how often each table is read.
#[allow(dead_code)]
#[derive(Default)]
pub struct CountingStore {
    pub settings_loads: AtomicUsize,
    pub activity_loads: AtomicUsize,
    pub schedule_loads: AtomicUsize,
    pub special_event_loads: AtomicUsize,
    pub spot_loads: AtomicUsize,
    pub fail_activities: std::sync::atomic::AtomicBool,
}

#[async_trait]
impl ContentStore for CountingStore {
    async fn settings(&self) -> Result<Arc<Settings>, AppError> {
        self.settings_loads.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(serde_json::from_value(settings_json()).unwrap()))
    }

    async fn activities(&self) -> Result<Arc<Vec<Activity>>, AppError> {
        self.activity_loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_activities.load(Ordering::SeqCst) {
            return Err(AppError::malformed("activities.json", "simulated failure"));
        }
        let mut activities: Vec<Activity> = serde_json::from_value(activities_json()["activities"].clone()).unwrap();
        for a in &mut activities {
            a.id = hostel_guide::domain::services::slug::normalize(&a.id, &a.details.title);
        }
        Ok(Arc::new(activities))
    }

    async fn weekly_schedule(&self) -> Result<Arc<WeeklySchedule>, AppError> {
        self.schedule_loads.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(serde_json::from_value::<WeeklySchedule>(schedule_json()["schedule"].clone()).unwrap()))
    }

    async fn special_events(&self) -> Result<Arc<Vec<SpecialEvent>>, AppError> {
        self.special_event_loads.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(serde_json::from_value(special_events_json()["events"].clone()).unwrap()))
    }

    async fn spots(&self, _category: SpotCategory) -> Result<Arc<Vec<Spot>>, AppError> {
        self.spot_loads.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Vec::new()))
    }
}
