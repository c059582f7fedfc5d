use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Category, LatLng};

/// A place projected into route order.
///
/// `location` is in display order (lat, lng), unlike
/// [`Place::coordinates`](super::Place) which is in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteWaypoint {
    pub name: String,
    pub location: LatLng,
    pub category: Category,
}

/// Final assembled walking route, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    /// Finely sampled walkable path geometry, in (lat, lng) order.
    pub points: Vec<LatLng>,

    /// Visited places in route order.
    pub waypoints: Vec<RouteWaypoint>,

    pub distance_km: f64,
    pub estimated_time_minutes: u32,

    /// Display names of destination and waypoints, in visiting order.
    pub locations: Vec<String>,
}

impl RouteResult {
    /// Render the route as a GeoJSON FeatureCollection value: one
    /// LineString feature for the path plus a Point feature per waypoint.
    /// GeoJSON positions are (lng, lat).
    pub fn to_geojson_value(&self) -> serde_json::Value {
        let path: Vec<[f64; 2]> = self.points.iter().map(|p| [p.lng, p.lat]).collect();

        let mut features = vec![json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": path },
            "properties": {
                "distance_km": self.distance_km,
                "estimated_time_minutes": self.estimated_time_minutes,
            },
        })];

        for wp in &self.waypoints {
            features.push(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [wp.location.lng, wp.location.lat],
                },
                "properties": {
                    "name": wp.name,
                    "category": wp.category,
                },
            }));
        }

        json!({ "type": "FeatureCollection", "features": features })
    }
}
