//! Stezhka Route - Place resolution and route assembly
//!
//! The pipeline composes the intent parser with pluggable providers:
//! parse text, resolve destination and waypoints, build a walking route,
//! then extend it toward a requested distance by inserting POIs sampled
//! along the path.

pub mod builder;
pub mod extender;
pub mod pipeline;
pub mod poi;
pub mod resolver;

pub use builder::RouteBuilder;
pub use pipeline::{ExplorationParams, RouteOptions, RoutePipeline};
pub use resolver::{PlaceResolver, DEFAULT_POI_RADIUS_M, NAME_SEARCH_RADIUS_KM};
