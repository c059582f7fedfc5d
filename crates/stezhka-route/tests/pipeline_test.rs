//! Integration tests for the route pipeline with deterministic fake
//! providers: a canned geocoder, an empty commercial provider, and a
//! straight-line directions stub.

use async_trait::async_trait;
use std::collections::HashMap;
use stezhka_core::error::{Result, StezhkaError};
use stezhka_core::models::{BoundingBox, Category, LngLat};
use stezhka_core::ports::{
    DirectionsProvider, GeocodeCandidate, GeocodeProvider, PlaceSearchProvider, RouteGeometry,
};
use stezhka_geo::haversine_km;
use stezhka_route::{RouteOptions, RoutePipeline};

/// Kyiv city centre.
const ORIGIN: LngLat = LngLat { lng: 30.5234, lat: 50.4501 };

/// Degrees of latitude per kilometre, for placing test fixtures.
const DEG_LAT_PER_KM: f64 = 1.0 / 111.195;

/// Geocoder answering exact query strings with canned candidates,
/// filtered by the requested viewbox.
#[derive(Default)]
struct StubGeocoder {
    hits: HashMap<String, Vec<GeocodeCandidate>>,
}

impl StubGeocoder {
    fn with_hit(mut self, query: &str, name: &str, coordinates: LngLat) -> Self {
        self.hits.entry(query.to_string()).or_default().push(GeocodeCandidate {
            name: name.to_string(),
            coordinates,
            external_id: None,
            address: None,
        });
        self
    }
}

#[async_trait]
impl GeocodeProvider for StubGeocoder {
    async fn search(&self, query: &str, viewbox: BoundingBox) -> Result<Vec<GeocodeCandidate>> {
        Ok(self
            .hits
            .get(query)
            .map(|hits| {
                hits.iter()
                    .filter(|c| viewbox.contains(c.coordinates))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Commercial provider that never finds anything.
struct EmptyPlaces;

#[async_trait]
impl PlaceSearchProvider for EmptyPlaces {
    async fn search(
        &self,
        _query: &str,
        _proximity: LngLat,
        _category: Option<Category>,
    ) -> Result<Vec<GeocodeCandidate>> {
        Ok(Vec::new())
    }
}

/// Commercial provider that always fails, to exercise the swallow path.
struct FailingPlaces;

#[async_trait]
impl PlaceSearchProvider for FailingPlaces {
    async fn search(
        &self,
        _query: &str,
        _proximity: LngLat,
        _category: Option<Category>,
    ) -> Result<Vec<GeocodeCandidate>> {
        Err(StezhkaError::Provider {
            provider: "stub".to_string(),
            reason: "simulated outage".to_string(),
        })
    }
}

/// Directions stub: straight legs between consecutive input points,
/// interpolated geometry, haversine distances, 5 km/h walking pace.
struct StraightLineDirections;

#[async_trait]
impl DirectionsProvider for StraightLineDirections {
    async fn walking_route(&self, coordinates: &[LngLat]) -> Result<Option<RouteGeometry>> {
        if coordinates.len() < 2 {
            return Ok(None);
        }

        let mut geometry = Vec::new();
        let mut distance_km = 0.0;
        for leg in coordinates.windows(2) {
            distance_km += haversine_km(leg[0], leg[1]);
            for step in 0..20 {
                let t = step as f64 / 20.0;
                geometry.push(LngLat::new(
                    leg[0].lng + (leg[1].lng - leg[0].lng) * t,
                    leg[0].lat + (leg[1].lat - leg[0].lat) * t,
                ));
            }
        }
        geometry.push(*coordinates.last().unwrap());

        let distance_meters = distance_km * 1000.0;
        Ok(Some(RouteGeometry {
            geometry,
            distance_meters,
            duration_seconds: distance_meters / 1.39,
        }))
    }
}

/// Directions stub with no path between any points.
struct NoRouteDirections;

#[async_trait]
impl DirectionsProvider for NoRouteDirections {
    async fn walking_route(&self, _coordinates: &[LngLat]) -> Result<Option<RouteGeometry>> {
        Ok(None)
    }
}

fn km_north(origin: LngLat, km: f64) -> LngLat {
    LngLat::new(origin.lng, origin.lat + km * DEG_LAT_PER_KM)
}

#[tokio::test]
async fn test_destination_only_request_end_to_end() {
    let destination = km_north(ORIGIN, 2.0);
    let geocoder = StubGeocoder::default().with_hit("Маріїнський парк", "Маріїнський парк", destination);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let route = pipeline
        .generate_route_from_text(ORIGIN, "прогулянка до Маріїнського парку на 2 км", RouteOptions::default())
        .await
        .unwrap();

    assert!((route.distance_km - 2.0).abs() < 0.05, "distance was {}", route.distance_km);
    assert!(route.waypoints.is_empty());
    assert_eq!(route.locations, vec!["Маріїнський парк".to_string()]);

    // Path endpoints line up with origin and destination after the
    // (lng,lat) -> (lat,lng) conversion.
    let first = route.points.first().unwrap();
    let last = route.points.last().unwrap();
    assert!((first.lat - ORIGIN.lat).abs() < 1e-9);
    assert!((first.lng - ORIGIN.lng).abs() < 1e-9);
    assert!((last.lat - destination.lat).abs() < 1e-9);
    assert!((last.lng - destination.lng).abs() < 1e-9);

    // ~2 km at 5 km/h is around 24 minutes.
    assert!(route.estimated_time_minutes >= 20 && route.estimated_time_minutes <= 28);
}

#[tokio::test]
async fn test_extension_never_shortens_route() {
    let destination = km_north(ORIGIN, 1.0);
    // A park ~300 m east of the path, reachable from a sampled point.
    let park = LngLat::new(ORIGIN.lng + 0.004, ORIGIN.lat + 0.3 * DEG_LAT_PER_KM);
    let geocoder = StubGeocoder::default()
        .with_hit("Золотих воріт", "Золоті ворота", destination)
        .with_hit("парк", "Міський сад", park);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let base = pipeline
        .generate_route_from_text(ORIGIN, "до Золотих воріт", RouteOptions::default())
        .await
        .unwrap();

    let extended = pipeline
        .extend_route_to_distance(base.clone(), 3.0, ORIGIN, destination)
        .await
        .unwrap();

    assert!(extended.distance_km >= base.distance_km);
    assert_eq!(extended.waypoints.len(), 1);
    assert_eq!(extended.waypoints[0].name, "Міський сад");
    assert!(extended.locations.contains(&"Міський сад".to_string()));
}

#[tokio::test]
async fn test_extension_without_pois_returns_route_unchanged() {
    let destination = km_north(ORIGIN, 1.0);
    let geocoder = StubGeocoder::default().with_hit("Поштова площа", "Поштова площа", destination);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let base = pipeline
        .generate_route_from_text(ORIGIN, "до Поштової площі", RouteOptions::default())
        .await
        .unwrap();

    let extended = pipeline
        .extend_route_to_distance(base.clone(), 10.0, ORIGIN, destination)
        .await
        .unwrap();

    assert_eq!(extended.distance_km, base.distance_km);
    assert!(extended.waypoints.is_empty());
}

#[tokio::test]
async fn test_target_already_met_skips_extension() {
    let destination = km_north(ORIGIN, 2.0);
    let geocoder = StubGeocoder::default().with_hit("Оболонь", "Оболонь", destination);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let base = pipeline
        .generate_route_from_text(ORIGIN, "до Оболонь", RouteOptions::default())
        .await
        .unwrap();

    let untouched = pipeline
        .extend_route_to_distance(base.clone(), 1.0, ORIGIN, destination)
        .await
        .unwrap();
    assert_eq!(untouched.distance_km, base.distance_km);
}

#[tokio::test]
async fn test_find_nearest_place_respects_radius() {
    let far_cafe = km_north(ORIGIN, 10.0);
    let near_cafe = km_north(ORIGIN, 1.0);
    let geocoder = StubGeocoder::default()
        .with_hit("кав'ярня", "Далека кава", far_cafe)
        .with_hit("кав'ярня", "Близька кава", near_cafe);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let found = pipeline
        .resolver()
        .find_nearest_place(ORIGIN, Category::Cafe, 5000.0)
        .await
        .unwrap();

    assert_eq!(found.name, "Близька кава");
    assert!(haversine_km(ORIGIN, found.coordinates) <= 5.0);
}

#[tokio::test]
async fn test_find_nearest_place_none_outside_radius() {
    let far_cafe = km_north(ORIGIN, 10.0);
    let geocoder = StubGeocoder::default().with_hit("кав'ярня", "Далека кава", far_cafe);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let found = pipeline
        .resolver()
        .find_nearest_place(ORIGIN, Category::Cafe, 5000.0)
        .await;
    assert!(found.is_none());
}

#[tokio::test]
async fn test_provider_outage_is_swallowed_as_not_found() {
    let pipeline =
        RoutePipeline::new(StubGeocoder::default(), FailingPlaces, StraightLineDirections);

    let found = pipeline
        .resolver()
        .find_nearest_place(ORIGIN, Category::Park, 5000.0)
        .await;
    assert!(found.is_none());
}

#[tokio::test]
async fn test_unresolvable_destination_is_user_facing_error() {
    let pipeline =
        RoutePipeline::new(StubGeocoder::default(), EmptyPlaces, StraightLineDirections);

    let err = pipeline
        .generate_route_from_text(ORIGIN, "до Невідомої вулиці", RouteOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, StezhkaError::DestinationNotFound { .. }));
    assert!(err.is_user_facing());
}

#[tokio::test]
async fn test_no_walkable_route_propagates() {
    let destination = km_north(ORIGIN, 1.0);
    let geocoder = StubGeocoder::default().with_hit("Труханів острів", "Труханів острів", destination);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, NoRouteDirections);

    let err = pipeline
        .generate_route_from_text(ORIGIN, "до Труханів острів", RouteOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StezhkaError::NoWalkableRoute));
}

#[tokio::test]
async fn test_exploration_route_from_waypoint_categories() {
    let cafe = km_north(ORIGIN, 0.5);
    let park = LngLat::new(ORIGIN.lng + 0.01, ORIGIN.lat);
    let geocoder = StubGeocoder::default()
        .with_hit("кав'ярня", "Кавова хата", cafe)
        .with_hit("парк", "Міський сад", park);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let route = pipeline
        .generate_route_from_text(ORIGIN, "прогулянка з кав'ярнею та парком", RouteOptions::default())
        .await
        .unwrap();

    // Last POI becomes the nominal destination, the rest are waypoints.
    assert_eq!(route.waypoints.len(), 1);
    assert_eq!(route.waypoints[0].name, "Кавова хата");
    assert_eq!(
        route.locations,
        vec!["Міський сад".to_string(), "Кавова хата".to_string()]
    );
}

#[tokio::test]
async fn test_exploration_with_no_pois_fails_user_facing() {
    let pipeline =
        RoutePipeline::new(StubGeocoder::default(), EmptyPlaces, StraightLineDirections);

    let err = pipeline
        .generate_route_from_text(ORIGIN, "прогулянка з кав'ярнею та парком", RouteOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StezhkaError::NoPoisNearby));
    assert!(err.is_user_facing());
}

#[tokio::test]
async fn test_forced_point_to_point_overrides_exploration() {
    use stezhka_core::models::RouteMode;

    let pipeline =
        RoutePipeline::new(StubGeocoder::default(), EmptyPlaces, StraightLineDirections);

    // The text would infer exploration, but the forced mode demands a
    // destination, which cannot be resolved here.
    let err = pipeline
        .generate_route_from_text(
            ORIGIN,
            "прогулянка з кав'ярнею та парком",
            RouteOptions { route_mode: Some(RouteMode::PointToPoint) },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StezhkaError::DestinationNotFound { .. }));
}

#[tokio::test]
async fn test_point_to_point_with_category_waypoint() {
    let park = km_north(ORIGIN, 1.0);
    let cafe = LngLat::new(ORIGIN.lng + 0.008, ORIGIN.lat + 0.5 * DEG_LAT_PER_KM);
    let geocoder = StubGeocoder::default()
        .with_hit("парк", "Міський сад", park)
        .with_hit("кав'ярня", "Кавова хата", cafe);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let route = pipeline
        .generate_route_from_text(ORIGIN, "прогулянка до парку з кав'ярнею", RouteOptions::default())
        .await
        .unwrap();

    assert_eq!(route.waypoints.len(), 1);
    assert_eq!(route.waypoints[0].name, "Кавова хата");
    assert_eq!(route.waypoints[0].category, Category::Cafe);
    assert_eq!(
        route.locations,
        vec!["Міський сад".to_string(), "Кавова хата".to_string()]
    );
}

#[tokio::test]
async fn test_named_waypoint_satisfies_its_category() {
    let destination = km_north(ORIGIN, 2.0);
    let named_park = km_north(ORIGIN, 1.0);
    let other_park = LngLat::new(ORIGIN.lng + 0.01, ORIGIN.lat);
    let geocoder = StubGeocoder::default()
        .with_hit("Оболоні", "Оболонь", destination)
        .with_hit("Шевченківський парк", "Шевченківський парк", named_park)
        .with_hit("парк", "Інший сад", other_park);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let route = pipeline
        .generate_route_from_text(
            ORIGIN,
            "до Оболоні через Шевченківський парк з парком",
            RouteOptions::default(),
        )
        .await
        .unwrap();

    // The named park already covers the Park category, so no second
    // park is fetched.
    assert_eq!(route.waypoints.len(), 1);
    assert_eq!(route.waypoints[0].name, "Шевченківський парк");
    assert_eq!(route.waypoints[0].category, Category::Park);
    assert!(!route.locations.contains(&"Інший сад".to_string()));
}

#[tokio::test]
async fn test_poi_aggregator_one_place_per_category() {
    let cafe_a = km_north(ORIGIN, 0.5);
    let cafe_b = km_north(ORIGIN, 0.6);
    let park = LngLat::new(ORIGIN.lng + 0.01, ORIGIN.lat);
    let geocoder = StubGeocoder::default()
        .with_hit("кав'ярня", "Кава А", cafe_a)
        .with_hit("кав'ярня", "Кава Б", cafe_b)
        .with_hit("парк", "Міський сад", park);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let pois = pipeline
        .resolver()
        .search_nearby_pois(ORIGIN, &[Category::Cafe, Category::Park], 5000.0, 3)
        .await;

    // One place per category even with limit_per_type > 1.
    assert_eq!(pois.len(), 2);
    assert_eq!(pois[0].category, Category::Cafe);
    assert_eq!(pois[1].category, Category::Park);
}

#[tokio::test]
async fn test_poi_aggregator_deduplicates_by_proximity() {
    let spot = km_north(ORIGIN, 0.5);
    let geocoder = StubGeocoder::default()
        .with_hit("кав'ярня", "Кафе в музеї", spot)
        .with_hit("музей", "Музей з кафе", LngLat::new(spot.lng + 0.0002, spot.lat));
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let pois = pipeline
        .resolver()
        .search_nearby_pois(ORIGIN, &[Category::Cafe, Category::Museum], 5000.0, 1)
        .await;
    assert_eq!(pois.len(), 1);
}

#[tokio::test]
async fn test_name_resolution_tries_declension_variants() {
    let station = km_north(ORIGIN, 3.0);
    // Only the nominative spelling is known to the geocoder.
    let geocoder =
        StubGeocoder::default().with_hit("Західний автовокзал", "Західний автовокзал", station);
    let pipeline = RoutePipeline::new(geocoder, EmptyPlaces, StraightLineDirections);

    let route = pipeline
        .generate_route_from_text(ORIGIN, "до Західного автовокзалу", RouteOptions::default())
        .await
        .unwrap();
    assert_eq!(route.locations, vec!["Західний автовокзал".to_string()]);
}
