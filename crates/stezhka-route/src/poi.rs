//! POI aggregation across categories, for exploration routes.

use stezhka_core::models::{Category, LngLat, Place};
use stezhka_core::ports::{GeocodeProvider, PlaceSearchProvider};
use stezhka_geo::is_near_duplicate;
use tracing::debug;

use crate::resolver::PlaceResolver;

impl<G, C> PlaceResolver<G, C>
where
    G: GeocodeProvider,
    C: PlaceSearchProvider,
{
    /// Gather a deduplicated set of nearby places, one per requested
    /// category in order. `limit_per_type` only caps the aggregate total
    /// at `limit_per_type * categories.len()`; fetching several places
    /// per category is deliberately not attempted.
    pub async fn search_nearby_pois(
        &self,
        center: LngLat,
        categories: &[Category],
        radius_m: f64,
        limit_per_type: usize,
    ) -> Vec<Place> {
        let cap = limit_per_type.max(1) * categories.len();
        let mut pois: Vec<Place> = Vec::new();

        for category in categories {
            if pois.len() >= cap {
                break;
            }
            if let Some(place) = self.find_nearest_place(center, *category, radius_m).await {
                let duplicate = pois
                    .iter()
                    .any(|p| is_near_duplicate(p.coordinates, place.coordinates));
                if !duplicate {
                    debug!(name = %place.name, category = ?place.category, "aggregated POI");
                    pois.push(place);
                }
            }
        }

        pois
    }
}
