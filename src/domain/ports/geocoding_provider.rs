//! Geocoding Provider Port
//!
//! Common capability interface shared by interchangeable geocoding providers.

use crate::domain::entities::Address;
use crate::domain::error::GeocodeError;

/// A geocoding provider.
///
/// Providers differ in what they support. An operation a provider cannot
/// serve fails with `GeocodeError::UnsupportedOperation`, so callers can
/// detect missing capabilities the same way for every provider.
pub trait GeocodingProvider: Send + Sync {
    /// Stable provider identifier.
    fn name(&self) -> &str;

    /// Resolve a query into candidate addresses, names in `locale`.
    fn resolve_forward(&self, query: &str, locale: &str) -> Result<Vec<Address>, GeocodeError>;

    /// Resolve coordinates into candidate addresses.
    fn resolve_reverse(&self, latitude: f64, longitude: f64)
        -> Result<Vec<Address>, GeocodeError>;
}
