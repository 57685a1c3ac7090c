//! geoip-geocoder Library
//!
//! Forward-only IP geocoding: resolves an IP address into a normalized
//! address through a pluggable GeoIP adapter.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{MaxMindAdapter, StaticAdapter};
pub use application::GeoIpResolver;
pub use config::load_config;
pub use domain::entities::{Address, AdminUnit, Bounds};
pub use domain::error::GeocodeError;
pub use domain::ports::{GeoAdapter, GeocodingProvider};
pub use domain::record::GeoRecord;
