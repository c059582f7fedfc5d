//! The route orchestrator: text in, walkable route out.

use stezhka_core::error::{Result, StezhkaError};
use stezhka_core::models::{
    Category, LatLng, LngLat, Place, RouteMode, RouteRequest, RouteResult, RouteWaypoint,
    MAX_STOP_COUNT, MIN_STOP_COUNT,
};
use stezhka_core::ports::{DirectionsProvider, GeocodeProvider, PlaceSearchProvider};
use stezhka_geo::is_near_duplicate;
use tracing::{debug, info};

use crate::builder::RouteBuilder;
use crate::resolver::{PlaceResolver, DEFAULT_POI_RADIUS_M};

/// Caller-supplied options for route generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteOptions {
    /// Force a generation mode instead of following the parser's
    /// exploration inference.
    pub route_mode: Option<RouteMode>,
}

/// Parameters for exploration route generation.
#[derive(Debug, Clone, Default)]
pub struct ExplorationParams {
    /// Categories to visit; defaults to the standard exploration mix.
    pub types: Vec<Category>,
    pub desired_poi_count: usize,
    pub target_distance_km: Option<f64>,
}

/// Orchestrates intent parsing, place resolution, route building, and
/// route extension over the three provider ports.
pub struct RoutePipeline<G, C, D>
where
    G: GeocodeProvider,
    C: PlaceSearchProvider,
    D: DirectionsProvider,
{
    pub(crate) resolver: PlaceResolver<G, C>,
    pub(crate) builder: RouteBuilder<D>,
}

impl<G, C, D> RoutePipeline<G, C, D>
where
    G: GeocodeProvider,
    C: PlaceSearchProvider,
    D: DirectionsProvider,
{
    pub fn new(geocoder: G, places: C, directions: D) -> Self {
        Self {
            resolver: PlaceResolver::new(geocoder, places),
            builder: RouteBuilder::new(directions),
        }
    }

    /// Access to the resolver for direct POI search features.
    pub fn resolver(&self) -> &PlaceResolver<G, C> {
        &self.resolver
    }

    /// The sole entry point most callers need: parse a free-text request
    /// and assemble the route it asks for.
    pub async fn generate_route_from_text(
        &self,
        origin: LngLat,
        text: &str,
        options: RouteOptions,
    ) -> Result<RouteResult> {
        let request = stezhka_nlp::parse(text);
        debug!(?request, "parsed route request");

        let exploration = match options.route_mode {
            Some(RouteMode::PointToPoint) => false,
            Some(RouteMode::Exploration) => true,
            None => request.is_exploration,
        };

        if exploration {
            let mut types: Vec<Category> = Vec::new();
            if let Some(category) = request.destination_category {
                types.push(category);
            }
            for category in &request.waypoint_categories {
                if !types.contains(category) {
                    types.push(*category);
                }
            }
            return self
                .generate_exploration_route(
                    origin,
                    ExplorationParams {
                        types,
                        desired_poi_count: request.desired_stop_count,
                        target_distance_km: request.target_distance_km,
                    },
                )
                .await;
        }

        self.generate_point_to_point_route(origin, &request).await
    }

    async fn generate_point_to_point_route(
        &self,
        origin: LngLat,
        request: &RouteRequest,
    ) -> Result<RouteResult> {
        let destination = self.resolve_destination(origin, request).await?;
        info!(destination = %destination.name, "destination resolved");

        let waypoints = self.resolve_waypoints(origin, request, &destination).await;

        let coordinates: Vec<LngLat> = waypoints.iter().map(|p| p.coordinates).collect();
        let mut route = self
            .builder
            .build_route(origin, destination.coordinates, &coordinates)
            .await?;

        route.waypoints = waypoints.iter().map(project_waypoint).collect();
        route.locations = std::iter::once(destination.name.clone())
            .chain(waypoints.iter().map(|p| p.name.clone()))
            .collect();

        if let Some(target_km) = request.target_distance_km {
            if route.distance_km < target_km {
                route = self
                    .extend_route_to_distance(route, target_km, origin, destination.coordinates)
                    .await?;
            }
        }

        Ok(route)
    }

    async fn resolve_destination(
        &self,
        origin: LngLat,
        request: &RouteRequest,
    ) -> Result<Place> {
        let resolved = if let Some(name) = &request.destination_name {
            self.resolver.find_place_by_name(name, origin).await
        } else if let Some(category) = request.destination_category {
            self.resolver
                .find_nearest_place(origin, category, DEFAULT_POI_RADIUS_M)
                .await
        } else {
            None
        };

        resolved.ok_or_else(|| StezhkaError::DestinationNotFound {
            query: request
                .destination_name
                .clone()
                .or_else(|| {
                    request
                        .destination_category
                        .map(|c| c.info().display_name.to_string())
                })
                .unwrap_or_else(|| "маршрут".to_string()),
        })
    }

    /// Resolve waypoint names first, then categories not already covered
    /// by a resolved place. Lookups run sequentially: ordering decides
    /// ties, so parallelizing would change results.
    async fn resolve_waypoints(
        &self,
        origin: LngLat,
        request: &RouteRequest,
        destination: &Place,
    ) -> Vec<Place> {
        let mut waypoints: Vec<Place> = Vec::new();

        for name in &request.waypoint_names {
            if let Some(mut place) = self.resolver.find_place_by_name(name, origin).await {
                // A name like "Шевченківський парк" satisfies the Park
                // category, so tag it for the category pass below.
                if let Some(category) = stezhka_nlp::match_category(name) {
                    place.category = category;
                }
                push_if_distinct(&mut waypoints, place, destination);
            }
        }

        for category in &request.waypoint_categories {
            if waypoints.iter().any(|p| p.category == *category) {
                continue;
            }
            if let Some(place) = self
                .resolver
                .find_nearest_place(origin, *category, DEFAULT_POI_RADIUS_M)
                .await
            {
                push_if_distinct(&mut waypoints, place, destination);
            }
        }

        waypoints
    }

    /// Generate a route with no fixed destination: visit several nearby
    /// POIs, treating the last one as the nominal destination for the
    /// directions call.
    pub async fn generate_exploration_route(
        &self,
        origin: LngLat,
        params: ExplorationParams,
    ) -> Result<RouteResult> {
        let types = if params.types.is_empty() {
            Category::EXPLORATION_DEFAULTS.to_vec()
        } else {
            params.types
        };

        let pois = self
            .resolver
            .search_nearby_pois(origin, &types, DEFAULT_POI_RADIUS_M, 1)
            .await;
        if pois.is_empty() {
            return Err(StezhkaError::NoPoisNearby);
        }

        let take = params
            .desired_poi_count
            .clamp(MIN_STOP_COUNT, MAX_STOP_COUNT)
            .min(pois.len());
        let selected = &pois[..take];
        info!(count = selected.len(), "exploration POIs selected");

        let Some((destination, vias)) = selected.split_last() else {
            return Err(StezhkaError::NoPoisNearby);
        };

        let coordinates: Vec<LngLat> = vias.iter().map(|p| p.coordinates).collect();
        let mut route = self
            .builder
            .build_route(origin, destination.coordinates, &coordinates)
            .await?;

        route.waypoints = vias.iter().map(project_waypoint).collect();
        route.locations = std::iter::once(destination.name.clone())
            .chain(vias.iter().map(|p| p.name.clone()))
            .collect();

        if let Some(target_km) = params.target_distance_km {
            if route.distance_km < target_km {
                route = self
                    .extend_route_to_distance(route, target_km, origin, destination.coordinates)
                    .await?;
            }
        }

        Ok(route)
    }
}

/// Project a resolved place into route order (lat, lng).
pub(crate) fn project_waypoint(place: &Place) -> RouteWaypoint {
    RouteWaypoint {
        name: place.name.clone(),
        location: LatLng::from(place.coordinates),
        category: place.category,
    }
}

fn push_if_distinct(waypoints: &mut Vec<Place>, place: Place, destination: &Place) {
    if is_near_duplicate(place.coordinates, destination.coordinates) {
        return;
    }
    if waypoints
        .iter()
        .any(|p| is_near_duplicate(p.coordinates, place.coordinates))
    {
        return;
    }
    waypoints.push(place);
}
