//! Bounded route extension toward a target distance.

use stezhka_core::error::Result;
use stezhka_core::models::{Category, LngLat, Place, RouteResult, RouteWaypoint};
use stezhka_core::ports::{DirectionsProvider, GeocodeProvider, PlaceSearchProvider};
use stezhka_geo::{is_near_duplicate, point_at_fraction, sample_along};
use tracing::{debug, warn};

use crate::pipeline::{project_waypoint, RoutePipeline};

/// How many points along the existing path to probe for POIs.
const EXTENSION_SAMPLE_COUNT: usize = 5;

/// POI search radius around each sampled point, meters.
const EXTENSION_POI_RADIUS_M: f64 = 1000.0;

/// Radius for the final park insertion near the 70% mark, meters.
const EXTRA_PARK_RADIUS_M: f64 = 1500.0;

/// Give up once the route has grown past this multiple of its original
/// length.
const MAX_GROWTH_FACTOR: f64 = 1.5;

impl<G, C, D> RoutePipeline<G, C, D>
where
    G: GeocodeProvider,
    C: PlaceSearchProvider,
    D: DirectionsProvider,
{
    /// Grow a route toward `target_km` by inserting POIs found near
    /// points sampled along the existing path.
    ///
    /// At most one extension pass plus one conditional park insertion;
    /// never an unbounded loop. Failures degrade silently to the shorter
    /// route, and the result is never shorter than the input.
    pub async fn extend_route_to_distance(
        &self,
        route: RouteResult,
        target_km: f64,
        origin: LngLat,
        destination: LngLat,
    ) -> Result<RouteResult> {
        if route.distance_km >= target_km {
            return Ok(route);
        }

        let samples = sample_along(&route.points, EXTENSION_SAMPLE_COUNT);
        let cycle = Category::EXPLORATION_DEFAULTS;

        let mut found: Vec<Place> = Vec::new();
        for (i, sample) in samples.iter().enumerate() {
            let category = cycle[i % cycle.len()];
            let center = LngLat::from(*sample);
            if let Some(place) = self
                .resolver
                .find_nearest_place(center, category, EXTENSION_POI_RADIUS_M)
                .await
            {
                if !is_duplicate_stop(&route.waypoints, &found, &place) {
                    debug!(name = %place.name, "extension POI found");
                    found.push(place);
                }
            }
        }

        if found.is_empty() {
            debug!("no extension POIs found, keeping original route");
            return Ok(route);
        }

        let mut extended = match self
            .rebuild_with_extras(&route, &found, origin, destination)
            .await
        {
            Ok(rebuilt) if rebuilt.distance_km >= route.distance_km => rebuilt,
            Ok(_) => return Ok(route),
            Err(e) => {
                warn!(error = %e, "route extension rebuild failed");
                return Ok(route);
            }
        };

        // One conditional extra insertion: a park near the 70% mark,
        // only while still short of target and not overgrown.
        if extended.distance_km < target_km
            && extended.distance_km < route.distance_km * MAX_GROWTH_FACTOR
        {
            if let Some(anchor) = point_at_fraction(&extended.points, 0.7) {
                if let Some(park) = self
                    .resolver
                    .find_nearest_place(LngLat::from(anchor), Category::Park, EXTRA_PARK_RADIUS_M)
                    .await
                {
                    if !is_duplicate_stop(&extended.waypoints, &[], &park) {
                        match self
                            .rebuild_with_extras(&extended, &[park], origin, destination)
                            .await
                        {
                            Ok(rebuilt) if rebuilt.distance_km >= extended.distance_km => {
                                extended = rebuilt;
                            }
                            Ok(_) => {}
                            Err(e) => warn!(error = %e, "park insertion rebuild failed"),
                        }
                    }
                }
            }
        }

        Ok(extended)
    }

    /// Rebuild the route through the existing waypoints plus new stops,
    /// carrying waypoint metadata and visit names forward.
    async fn rebuild_with_extras(
        &self,
        route: &RouteResult,
        extras: &[Place],
        origin: LngLat,
        destination: LngLat,
    ) -> Result<RouteResult> {
        let mut waypoints: Vec<RouteWaypoint> = route.waypoints.clone();
        waypoints.extend(extras.iter().map(project_waypoint));

        let coordinates: Vec<LngLat> =
            waypoints.iter().map(|w| LngLat::from(w.location)).collect();

        let mut rebuilt = self
            .builder
            .build_route(origin, destination, &coordinates)
            .await?;

        rebuilt.waypoints = waypoints;
        rebuilt.locations = route
            .locations
            .iter()
            .cloned()
            .chain(extras.iter().map(|p| p.name.clone()))
            .collect();

        Ok(rebuilt)
    }
}

fn is_duplicate_stop(existing: &[RouteWaypoint], found: &[Place], place: &Place) -> bool {
    existing
        .iter()
        .any(|w| is_near_duplicate(LngLat::from(w.location), place.coordinates))
        || found
            .iter()
            .any(|p| is_near_duplicate(p.coordinates, place.coordinates))
}
