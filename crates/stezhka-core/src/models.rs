pub mod geometry;
pub mod place;
pub mod request;
pub mod route;

pub use geometry::{BoundingBox, LatLng, LngLat};
pub use place::{Category, CategoryInfo, Place, Provenance};
pub use request::{RouteMode, RouteRequest, DEFAULT_STOP_COUNT, MAX_STOP_COUNT, MIN_STOP_COUNT};
pub use route::{RouteResult, RouteWaypoint};
