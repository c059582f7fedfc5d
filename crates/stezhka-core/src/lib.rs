//! Stezhka Core - Domain models, configuration, and provider ports
//!
//! This crate contains the domain types shared by the route pipeline and the
//! port definitions that geocoding/POI/directions adapters implement.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{Result, StezhkaError};
