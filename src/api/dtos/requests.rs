use chrono::NaiveDate;
use std::collections::HashMap;
use crate::domain::models::spot::Coordinates;
use crate::error::AppError;

pub fn parse_days(params: &HashMap<String, String>, default: u32, max: u32) -> Result<u32, AppError> {
    let days = match params.get("days") {
        Some(raw) => raw.parse::<u32>().map_err(|_| AppError::Validation("days must be a non-negative integer".into()))?,
        None => default,
    };
    if days > max {
        return Err(AppError::Validation(format!("days must be at most {}", max)));
    }
    Ok(days)
}

/// Optional `from=YYYY-MM-DD` anchor for the event window.
pub fn parse_from_date(params: &HashMap<String, String>) -> Result<Option<NaiveDate>, AppError> {
    params.get("from")
        .map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid from date".into())))
        .transpose()
}

/// Visitor position from `lat`/`lng`; both or neither.
pub fn parse_origin(params: &HashMap<String, String>) -> Result<Option<Coordinates>, AppError> {
    match (params.get("lat"), params.get("lng")) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let lat: f64 = lat.parse().map_err(|_| AppError::Validation("Invalid lat".into()))?;
            let lng: f64 = lng.parse().map_err(|_| AppError::Validation("Invalid lng".into()))?;
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                return Err(AppError::Validation("Coordinates out of range".into()));
            }
            Ok(Some(Coordinates { lat, lng }))
        }
        _ => Err(AppError::Validation("lat and lng must be given together".into())),
    }
}
