//! GeoIP Adapter Port
//!
//! Defines the interface a resolver uses to fetch raw geolocation data.

use crate::domain::error::GeocodeError;
use crate::domain::record::GeoRecord;
use std::net::IpAddr;

/// Source of raw geolocation records, indexed by IP.
///
/// This is an outbound port that abstracts the GeoIP database or service.
/// Implementations may read a MaxMind `.mmdb` file, call a web service,
/// or serve canned records.
pub trait GeoAdapter: Send {
    /// Select the locale used by subsequent content requests.
    fn set_locale(&mut self, locale: &str);

    /// Fetch the record for an IP.
    ///
    /// Fails with `GeocodeError::NoResult` when the store has no entry for
    /// `ip`, and with `GeocodeError::Adapter` for anything else that goes
    /// wrong. A found entry may still be an empty record.
    fn get_content(&self, ip: IpAddr) -> Result<GeoRecord, GeocodeError>;
}

impl<A: GeoAdapter + ?Sized> GeoAdapter for Box<A> {
    fn set_locale(&mut self, locale: &str) {
        (**self).set_locale(locale)
    }

    fn get_content(&self, ip: IpAddr) -> Result<GeoRecord, GeocodeError> {
        (**self).get_content(ip)
    }
}
