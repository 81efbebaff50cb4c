//! Map markers and regions for the alert map.
//!
//! NOTE: TypeScript mirror types are in ui/src/types.ts

use serde::{Deserialize, Serialize};

use super::alerts::model::{Alert, Category, Severity};
use super::display::marker_color;

/// Span shown when the map centers on a single alert.
const FOCUS_DELTA: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn centered_on(alert: &Alert) -> Self {
        Self {
            latitude: alert.location.latitude,
            longitude: alert.location.longitude,
            latitude_delta: FOCUS_DELTA,
            longitude_delta: FOCUS_DELTA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub coordinate: Coordinate,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: Category,
    pub pin_color: &'static str,
    pub emoji: &'static str,
}

impl From<&Alert> for MapMarker {
    fn from(alert: &Alert) -> Self {
        Self {
            id: alert.id.clone(),
            coordinate: Coordinate {
                latitude: alert.location.latitude,
                longitude: alert.location.longitude,
            },
            title: alert.title.clone(),
            description: alert.description.clone(),
            severity: alert.severity,
            category: alert.category,
            pin_color: marker_color(alert.severity),
            emoji: alert.category.emoji(),
        }
    }
}

/// One marker per active alert, in input order.
pub fn markers<'a, I>(alerts: I) -> Vec<MapMarker>
where
    I: IntoIterator<Item = &'a Alert>,
{
    alerts
        .into_iter()
        .filter(|alert| alert.is_active)
        .map(MapMarker::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alerts::store::AlertStore;

    #[test]
    fn test_markers_skip_inactive() {
        let store = AlertStore::sample().unwrap();
        let mut alerts = store.alerts().to_vec();
        alerts[1].is_active = false;

        let markers = markers(&alerts);
        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5"]);

        let outage = markers.iter().find(|m| m.id == "5").unwrap();
        assert_eq!(outage.pin_color, "#dc2626");
        assert_eq!(outage.emoji, "🚨");
        assert_eq!(outage.coordinate.longitude, -74.0776);
    }

    #[test]
    fn test_centered_region() {
        let store = AlertStore::sample().unwrap();
        let region = MapRegion::centered_on(store.get("4").unwrap());
        assert_eq!(region.latitude, 40.7831);
        assert_eq!(region.longitude, -73.9712);
        assert_eq!(region.latitude_delta, FOCUS_DELTA);
    }
}
