use async_trait::async_trait;
use serde::Deserialize;
use stezhka_core::error::{Result, StezhkaError};
use stezhka_core::models::{Category, LngLat};
use stezhka_core::ports::{
    DirectionsProvider, GeocodeCandidate, PlaceSearchProvider, RouteGeometry,
};
use tracing::debug;

const RESULT_LIMIT: usize = 10;

/// Commercial geocoding/POI/directions adapter for a Mapbox-compatible
/// endpoint. The access token is injected here, never read from the
/// environment by library code.
#[derive(Debug, Clone)]
pub struct MapboxClient {
    /// Base URL, e.g. "https://api.mapbox.com"
    base_url: String,

    /// API access token
    access_token: String,

    /// HTTP client
    client: reqwest::Client,
}

impl MapboxClient {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PlaceSearchProvider for MapboxClient {
    async fn search(
        &self,
        query: &str,
        proximity: LngLat,
        category: Option<Category>,
    ) -> Result<Vec<GeocodeCandidate>> {
        let proximity_param = format!("{},{}", proximity.lng, proximity.lat);
        debug!(query, proximity = %proximity_param, ?category, "mapbox place search");

        let encoded_query: String = query
            .chars()
            .map(|c| if c == '/' || c == ';' { ' ' } else { c })
            .collect();

        let mut params = vec![
            ("access_token", self.access_token.clone()),
            ("proximity", proximity_param),
            ("limit", RESULT_LIMIT.to_string()),
            ("language", "uk".to_string()),
        ];
        if category.is_some() {
            params.push(("types", "poi".to_string()));
        }

        let response = self
            .client
            .get(format!(
                "{}/geocoding/v5/mapbox.places/{}.json",
                self.base_url, encoded_query
            ))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StezhkaError::Provider {
                provider: "mapbox-geocoding".to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body: GeocodeResponse = response.json().await?;

        let candidates = body
            .features
            .into_iter()
            .filter(|feature| match category {
                // Category filtering via feature properties: keep hits whose
                // category list mentions the requested code.
                Some(cat) => feature
                    .properties
                    .category
                    .as_deref()
                    .is_some_and(|c| c.contains(cat.info().provider_code)),
                None => true,
            })
            .filter_map(|feature| {
                let &[lng, lat] = feature.center.as_slice() else {
                    return None;
                };
                Some(GeocodeCandidate {
                    name: feature.text,
                    coordinates: LngLat::new(lng, lat),
                    external_id: Some(feature.id),
                    address: Some(feature.place_name),
                })
            })
            .collect();

        Ok(candidates)
    }
}

#[async_trait]
impl DirectionsProvider for MapboxClient {
    async fn walking_route(&self, coordinates: &[LngLat]) -> Result<Option<RouteGeometry>> {
        let path = coordinates
            .iter()
            .map(|c| format!("{},{}", c.lng, c.lat))
            .collect::<Vec<_>>()
            .join(";");

        debug!(points = coordinates.len(), "mapbox walking directions");

        let response = self
            .client
            .get(format!(
                "{}/directions/v5/mapbox/walking/{}",
                self.base_url, path
            ))
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("geometries", "geojson"),
                ("overview", "full"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StezhkaError::Provider {
                provider: "mapbox-directions".to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body: DirectionsResponse = response.json().await?;

        if body.code != "Ok" {
            return Ok(None);
        }

        let Some(route) = body.routes.into_iter().next() else {
            return Ok(None);
        };

        let geometry = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| LngLat::new(lng, lat))
            .collect();

        Ok(Some(RouteGeometry {
            geometry,
            distance_meters: route.distance,
            duration_seconds: route.duration,
        }))
    }
}

/// Response from the Mapbox geocoding API
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    id: String,
    text: String,
    place_name: String,
    center: Vec<f64>,
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    category: Option<String>,
}

/// Response from the Mapbox directions API
#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    code: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    geometry: RouteGeoJson,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct RouteGeoJson {
    coordinates: Vec<[f64; 2]>,
}
