//! Stezhka Geo - Geodesic helpers for the route pipeline
//!
//! Thin utilities over the `geo` crate: haversine distance, bounding boxes
//! around an origin, near-duplicate detection, and path sampling.

pub mod spatial;

pub use spatial::{
    bbox_around, haversine_km, is_near_duplicate, point_at_fraction, sample_along,
    NEAR_DUPLICATE_EPSILON_DEG,
};
