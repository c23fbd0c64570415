use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OpeningHours {
    Simple(String),
    Detailed {
        default: String, // e.g. "11:30-22:00"
        #[serde(default)]
        exceptions: BTreeMap<String, String>, // weekday name -> "closed" / "12:00-20:00"
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    pub image: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>, // CMS alias of `coordinates`
    pub phone: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub tagline: Option<String>,
    pub rating: Option<String>,
    pub walking_distance: Option<String>,
}

impl Spot {
    pub fn position(&self) -> Option<Coordinates> {
        self.coordinates.or(self.location)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SpotCategory {
    Restaurants,
    Laundry,
    Transport,
    Bars,
    Activities,
}

impl SpotCategory {
    /// Lookup order used when searching every category.
    pub const ALL: [SpotCategory; 5] = [
        SpotCategory::Restaurants,
        SpotCategory::Laundry,
        SpotCategory::Transport,
        SpotCategory::Bars,
        SpotCategory::Activities,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            SpotCategory::Restaurants => "restaurants",
            SpotCategory::Laundry => "laundry",
            SpotCategory::Transport => "transport",
            SpotCategory::Bars => "bars",
            SpotCategory::Activities => "activities",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn meta(self) -> &'static CategoryMeta {
        &CATEGORIES[self.index()]
    }
}

impl fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SpotCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpotCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryMeta {
    pub slug: SpotCategory,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// Indexed by `SpotCategory::index`.
pub static CATEGORIES: [CategoryMeta; 5] = [
    CategoryMeta {
        slug: SpotCategory::Restaurants,
        name: "Restaurants",
        emoji: "🍜",
        description: "Local restaurants and cafes",
    },
    CategoryMeta {
        slug: SpotCategory::Laundry,
        name: "Laundry",
        emoji: "🧺",
        description: "Laundry services nearby",
    },
    CategoryMeta {
        slug: SpotCategory::Transport,
        name: "Transport",
        emoji: "🛵",
        description: "Scooter rental and transport",
    },
    CategoryMeta {
        slug: SpotCategory::Bars,
        name: "Bars",
        emoji: "🍺",
        description: "Bars and nightlife",
    },
    CategoryMeta {
        slug: SpotCategory::Activities,
        name: "Activities",
        emoji: "🎯",
        description: "Tours and activities",
    },
];
