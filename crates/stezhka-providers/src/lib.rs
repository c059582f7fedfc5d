//! Stezhka Providers - Network adapters for the provider ports
//!
//! Two adapter families: a Nominatim-style free-text geocoder and a
//! Mapbox-style commercial client covering place search and walking
//! directions. Credentials and base URLs are injected at construction;
//! nothing here reads the process environment.

pub mod mapbox;
pub mod nominatim;

pub use mapbox::MapboxClient;
pub use nominatim::NominatimClient;
