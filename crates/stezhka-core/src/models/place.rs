use serde::{Deserialize, Serialize};

use super::LngLat;

/// Closed set of point-of-interest kinds the parser and resolver know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Park,
    Cafe,
    Shop,
    Restaurant,
    Museum,
    Library,
    PlaceOfWorship,
    Beach,
    Lake,
    River,
    Custom,
}

/// Per-category lookup data: lemma keys for recognition, query terms for
/// the two provider families, and the Ukrainian display name.
///
/// A single table consulted everywhere, instead of string-comparison chains
/// scattered through the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    /// Canonical dictionary forms recognized by the morphology matcher.
    pub lemmas: &'static [&'static str],
    /// Free-text query term for the Nominatim-style provider.
    pub query_term: &'static str,
    /// Category code understood by the commercial provider's filter.
    pub provider_code: &'static str,
    /// Ukrainian display name, nominative singular.
    pub display_name: &'static str,
}

impl Category {
    /// Every category with a recognition vocabulary, in lexicon scan order.
    pub const KNOWN: [Category; 10] = [
        Category::Park,
        Category::Cafe,
        Category::Shop,
        Category::Restaurant,
        Category::Museum,
        Category::Library,
        Category::PlaceOfWorship,
        Category::Beach,
        Category::Lake,
        Category::River,
    ];

    /// Default category mix for exploration routes and route extension.
    pub const EXPLORATION_DEFAULTS: [Category; 5] = [
        Category::Park,
        Category::Cafe,
        Category::Museum,
        Category::Library,
        Category::PlaceOfWorship,
    ];

    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            Category::Park => &CategoryInfo {
                lemmas: &["парк", "сквер"],
                query_term: "парк",
                provider_code: "park",
                display_name: "Парк",
            },
            Category::Cafe => &CategoryInfo {
                lemmas: &["кав'ярня", "кафе", "кавярня"],
                query_term: "кав'ярня",
                provider_code: "cafe",
                display_name: "Кав'ярня",
            },
            Category::Shop => &CategoryInfo {
                lemmas: &["магазин", "крамниця"],
                query_term: "магазин",
                provider_code: "shop",
                display_name: "Магазин",
            },
            Category::Restaurant => &CategoryInfo {
                lemmas: &["ресторан"],
                query_term: "ресторан",
                provider_code: "restaurant",
                display_name: "Ресторан",
            },
            Category::Museum => &CategoryInfo {
                lemmas: &["музей"],
                query_term: "музей",
                provider_code: "museum",
                display_name: "Музей",
            },
            Category::Library => &CategoryInfo {
                lemmas: &["бібліотека"],
                query_term: "бібліотека",
                provider_code: "library",
                display_name: "Бібліотека",
            },
            Category::PlaceOfWorship => &CategoryInfo {
                lemmas: &["церква", "храм", "собор"],
                query_term: "церква",
                provider_code: "place_of_worship",
                display_name: "Церква",
            },
            Category::Beach => &CategoryInfo {
                lemmas: &["пляж"],
                query_term: "пляж",
                provider_code: "beach",
                display_name: "Пляж",
            },
            Category::Lake => &CategoryInfo {
                lemmas: &["озеро", "став"],
                query_term: "озеро",
                provider_code: "lake",
                display_name: "Озеро",
            },
            Category::River => &CategoryInfo {
                lemmas: &["річка", "ріка", "набережна"],
                query_term: "річка",
                provider_code: "river",
                display_name: "Річка",
            },
            Category::Custom => &CategoryInfo {
                lemmas: &[],
                query_term: "",
                provider_code: "poi",
                display_name: "Місце",
            },
        }
    }
}

/// Which provider family resolved a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    FreeTextGeocoder,
    CommercialGeocoder,
}

/// A resolved real-world point. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,

    /// Provider-order coordinates (lng, lat).
    pub coordinates: LngLat,

    pub category: Category,

    pub address: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub photo_url: Option<String>,
    pub description: Option<String>,

    /// Which provider family produced this record.
    pub provenance: Provenance,
    pub external_id: Option<String>,
}

impl Place {
    /// Create a place with only the fields every provider can supply.
    pub fn new(
        name: impl Into<String>,
        coordinates: LngLat,
        category: Category,
        provenance: Provenance,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates,
            category,
            address: None,
            rating: None,
            rating_count: None,
            photo_url: None,
            description: None,
            provenance,
            external_id: None,
        }
    }

    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
