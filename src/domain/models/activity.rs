use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Food,
    Bars,
    Activities,
}

/// Call-to-action button shown on an event card.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventCta {
    Whatsapp {
        label: String,
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Link {
        label: String,
        url: String,
    },
}

/// Display fields shared by activities, special events and the unified feed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventDetails {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub category: EventCategory,
    #[serde(default)]
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub cta: Option<EventCta>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub details: EventDetails,
}
