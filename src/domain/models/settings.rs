use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WifiSettings {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CategoryImages {
    pub food: Option<String>,
    pub activities: Option<String>,
    pub services: Option<String>,
    pub bars: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub hostel_name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub accent_color: String,
    pub wifi: WifiSettings,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub contact_whats_app: String,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
    pub timezone: String, // IANA name, e.g. "Asia/Bangkok"
    pub hero_image: Option<String>,
    pub category_images: Option<CategoryImages>,
}
