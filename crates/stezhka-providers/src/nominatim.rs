use async_trait::async_trait;
use serde::Deserialize;
use stezhka_core::error::{Result, StezhkaError};
use stezhka_core::models::{BoundingBox, LngLat};
use stezhka_core::ports::{GeocodeCandidate, GeocodeProvider};
use tracing::debug;

const USER_AGENT: &str = "stezhka/0.1 (walking route generator)";
const RESULT_LIMIT: usize = 10;

/// Free-text geocoding adapter for a Nominatim-compatible endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    /// Base URL, e.g. "https://nominatim.openstreetmap.org"
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GeocodeProvider for NominatimClient {
    async fn search(&self, query: &str, viewbox: BoundingBox) -> Result<Vec<GeocodeCandidate>> {
        // Nominatim viewbox order: min lng, min lat, max lng, max lat.
        let viewbox_param = format!(
            "{},{},{},{}",
            viewbox.min.lng, viewbox.min.lat, viewbox.max.lng, viewbox.max.lat
        );

        debug!(query, viewbox = %viewbox_param, "nominatim search");

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("User-Agent", USER_AGENT)
            .query(&[
                ("q", query),
                ("format", "jsonv2"),
                ("viewbox", viewbox_param.as_str()),
                ("bounded", "1"),
                ("limit", &RESULT_LIMIT.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StezhkaError::Provider {
                provider: "nominatim".to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let hits: Vec<NominatimHit> = response.json().await?;

        let candidates = hits
            .into_iter()
            .filter_map(|hit| {
                let lng = hit.lon.parse::<f64>().ok()?;
                let lat = hit.lat.parse::<f64>().ok()?;
                Some(GeocodeCandidate {
                    // Short name when present, full display name otherwise.
                    name: hit.name.filter(|n| !n.is_empty()).unwrap_or_else(|| {
                        hit.display_name
                            .split(',')
                            .next()
                            .unwrap_or(&hit.display_name)
                            .to_string()
                    }),
                    coordinates: LngLat::new(lng, lat),
                    external_id: Some(hit.place_id.to_string()),
                    address: Some(hit.display_name),
                })
            })
            .collect();

        Ok(candidates)
    }
}

/// One result row from the Nominatim search API (jsonv2 format, lat/lon
/// arrive as strings).
#[derive(Debug, Deserialize)]
struct NominatimHit {
    place_id: u64,
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    name: Option<String>,
}
