//! Route construction over the directions port.

use stezhka_core::error::{Result, StezhkaError};
use stezhka_core::models::{Category, LatLng, LngLat, RouteResult, RouteWaypoint};
use stezhka_core::ports::DirectionsProvider;
use tracing::debug;

/// Builds walkable routes through an ordered coordinate list.
pub struct RouteBuilder<D: DirectionsProvider> {
    directions: D,
}

impl<D: DirectionsProvider> RouteBuilder<D> {
    pub fn new(directions: D) -> Self {
        Self { directions }
    }

    /// Build a route origin → waypoints → destination.
    ///
    /// Fails with [`StezhkaError::NoWalkableRoute`] when the provider
    /// finds no path. The returned waypoints carry placeholder names;
    /// callers overwrite them with resolved place data.
    pub async fn build_route(
        &self,
        origin: LngLat,
        destination: LngLat,
        waypoints: &[LngLat],
    ) -> Result<RouteResult> {
        let mut coordinates = Vec::with_capacity(waypoints.len() + 2);
        coordinates.push(origin);
        coordinates.extend_from_slice(waypoints);
        coordinates.push(destination);

        let geometry = self
            .directions
            .walking_route(&coordinates)
            .await?
            .ok_or(StezhkaError::NoWalkableRoute)?;

        let points: Vec<LatLng> = geometry.geometry.iter().map(|c| LatLng::from(*c)).collect();
        let distance_km = geometry.distance_meters / 1000.0;
        let estimated_time_minutes = (geometry.duration_seconds / 60.0).round() as u32;

        debug!(
            distance_km,
            estimated_time_minutes,
            points = points.len(),
            "route built"
        );

        let waypoints = waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| RouteWaypoint {
                name: format!("Зупинка {}", i + 1),
                location: LatLng::from(*w),
                category: Category::Custom,
            })
            .collect();

        Ok(RouteResult {
            points,
            waypoints,
            distance_km,
            estimated_time_minutes,
            locations: Vec::new(),
        })
    }
}
