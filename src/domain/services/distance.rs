use serde::Serialize;
use crate::domain::models::spot::{Coordinates, Spot};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters (haversine).
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// "200m" below a kilometer, "1.2km" above.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpotWithDistance {
    #[serde(flatten)]
    pub spot: Spot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
}

/// Attaches the distance from `origin` to every spot with a usable position.
/// A zero latitude or longitude counts as unset.
pub fn annotate_spots(spots: &[Spot], origin: Option<Coordinates>) -> Vec<SpotWithDistance> {
    spots.iter()
        .map(|spot| {
            let distance = match (origin, spot.position()) {
                (Some(from), Some(to)) if to.lat != 0.0 && to.lng != 0.0 => {
                    Some(calculate_distance(from.lat, from.lng, to.lat, to.lng))
                }
                _ => None,
            };
            SpotWithDistance {
                spot: spot.clone(),
                distance_meters: distance,
                distance_label: distance.map(format_distance),
            }
        })
        .collect()
}
