//! Port trait definitions
//!
//! These traits define the provider interfaces that adapters must
//! implement. The route pipeline is generic over them, so tests substitute
//! deterministic fakes for the network-backed adapters.

pub mod providers;

pub use providers::{
    DirectionsProvider, GeocodeCandidate, GeocodeProvider, PlaceSearchProvider, RouteGeometry,
};
