//! Place resolution over the two geocoding provider families.

use stezhka_core::models::{Category, LngLat, Place, Provenance};
use stezhka_core::ports::{GeocodeCandidate, GeocodeProvider, PlaceSearchProvider};
use stezhka_geo::{bbox_around, haversine_km};
use stezhka_nlp::name_variants;
use tracing::{debug, warn};

/// How far from the origin a named place may resolve.
pub const NAME_SEARCH_RADIUS_KM: f64 = 50.0;

/// Default radius for category lookups, in meters.
pub const DEFAULT_POI_RADIUS_M: f64 = 5000.0;

/// Resolves place names and categories to concrete [`Place`]s, trying the
/// free-text geocoder first and falling back to the commercial provider.
pub struct PlaceResolver<G, C>
where
    G: GeocodeProvider,
    C: PlaceSearchProvider,
{
    geocoder: G,
    places: C,
}

impl<G, C> PlaceResolver<G, C>
where
    G: GeocodeProvider,
    C: PlaceSearchProvider,
{
    pub fn new(geocoder: G, places: C) -> Self {
        Self { geocoder, places }
    }

    /// Resolve a place by (possibly declined) name near an origin.
    ///
    /// Spelling variants are tried in order; the first variant for which
    /// either provider returns anything decides the outcome. Candidate
    /// sets are never merged across variants. Within a set, the nearest
    /// candidate within [`NAME_SEARCH_RADIUS_KM`] wins.
    pub async fn find_place_by_name(&self, name: &str, origin: LngLat) -> Option<Place> {
        let viewbox = bbox_around(origin, NAME_SEARCH_RADIUS_KM);

        for variant in name_variants(name) {
            let mut provenance = Provenance::FreeTextGeocoder;
            let mut candidates = match self.geocoder.search(&variant, viewbox).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!(query = %variant, error = %e, "free-text geocoder failed");
                    Vec::new()
                }
            };

            if candidates.is_empty() {
                provenance = Provenance::CommercialGeocoder;
                candidates = match self.places.search(&variant, origin, None).await {
                    Ok(hits) => hits,
                    Err(e) => {
                        warn!(query = %variant, error = %e, "commercial geocoder failed");
                        Vec::new()
                    }
                };
            }

            if !candidates.is_empty() {
                debug!(query = %variant, count = candidates.len(), "name variant resolved");
                return nearest_within(candidates, origin, NAME_SEARCH_RADIUS_KM)
                    .map(|c| place_from_candidate(c, Category::Custom, provenance));
            }
        }

        None
    }

    /// Find the nearest place of a category within `radius_m` meters of
    /// the origin. Provider errors are logged and treated as "not found".
    pub async fn find_nearest_place(
        &self,
        origin: LngLat,
        category: Category,
        radius_m: f64,
    ) -> Option<Place> {
        let radius_km = radius_m / 1000.0;
        let query = category.info().query_term;
        let viewbox = bbox_around(origin, radius_km);

        let mut provenance = Provenance::FreeTextGeocoder;
        let mut candidates = match self.geocoder.search(query, viewbox).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(%query, error = %e, "free-text POI search failed");
                Vec::new()
            }
        };

        if candidates.is_empty() {
            provenance = Provenance::CommercialGeocoder;
            candidates = match self.places.search(query, origin, Some(category)).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!(%query, error = %e, "commercial POI search failed");
                    Vec::new()
                }
            };
        }

        nearest_within(candidates, origin, radius_km)
            .map(|c| place_from_candidate(c, category, provenance))
    }
}

/// The minimum-distance candidate within `radius_km` of the origin.
fn nearest_within(
    candidates: Vec<GeocodeCandidate>,
    origin: LngLat,
    radius_km: f64,
) -> Option<GeocodeCandidate> {
    candidates
        .into_iter()
        .map(|c| (haversine_km(origin, c.coordinates), c))
        .filter(|(d, _)| *d <= radius_km)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, c)| c)
}

fn place_from_candidate(
    candidate: GeocodeCandidate,
    category: Category,
    provenance: Provenance,
) -> Place {
    let mut place = Place::new(candidate.name, candidate.coordinates, category, provenance);
    place.address = candidate.address;
    place.external_id = candidate.external_id;
    place
}
