use async_trait::async_trait;

use crate::error::Result;
use crate::models::{BoundingBox, Category, LngLat};

/// One ranked hit from a geocoding/POI lookup, provider-neutral.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub name: String,
    pub coordinates: LngLat,
    pub external_id: Option<String>,
    pub address: Option<String>,
}

/// Raw route returned by a directions provider, still in provider axis
/// order (lng, lat).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    pub geometry: Vec<LngLat>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Port for a free-text geocoding provider (Nominatim-style): ranked
/// candidates for a query, restricted to a bounding box.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn search(&self, query: &str, viewbox: BoundingBox) -> Result<Vec<GeocodeCandidate>>;
}

/// Port for a commercial geocoding/POI provider (Mapbox-style): ranked
/// candidates biased toward a proximity point, with optional category
/// filtering.
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    async fn search(
        &self,
        query: &str,
        proximity: LngLat,
        category: Option<Category>,
    ) -> Result<Vec<GeocodeCandidate>>;
}

/// Port for a walking-directions provider.
///
/// Returns `Ok(None)` when no walkable path exists between the points;
/// transport failures surface as errors.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn walking_route(&self, coordinates: &[LngLat]) -> Result<Option<RouteGeometry>>;
}
