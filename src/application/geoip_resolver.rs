//! GeoIP Resolver - forward-only IP geocoding use case
//!
//! Validates the query, fetches the raw record through the adapter and maps
//! it into an `Address`. Loopback IPs resolve to a fixed "localhost" address
//! without touching the adapter. Reverse geocoding and street addresses are
//! rejected.

use crate::domain::entities::{Address, AdminUnit, Bounds};
use crate::domain::error::GeocodeError;
use crate::domain::ports::{GeoAdapter, GeocodingProvider};
use crate::domain::record::GeoRecord;
use parking_lot::Mutex;
use std::net::IpAddr;

const PROVIDER_NAME: &str = "geoip2";
const ADDRESS_LOOKUP_UNSUPPORTED: &str = "address lookup not supported, only IP addresses";
const REVERSE_UNSUPPORTED: &str = "reverse geocoding not supported";

/// Forward-only geocoding provider backed by a GeoIP adapter.
///
/// The adapter sits behind a mutex that is held across `set_locale` and
/// `get_content`, so concurrent callers of one resolver never see another
/// request's locale.
pub struct GeoIpResolver<A> {
    adapter: Mutex<A>,
}

impl<A: GeoAdapter> GeoIpResolver<A> {
    /// Create a resolver over the given adapter.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter: Mutex::new(adapter),
        }
    }

    /// Give the adapter back.
    pub fn into_inner(self) -> A {
        self.adapter.into_inner()
    }

    fn fetch(&self, ip: IpAddr, locale: &str) -> Result<GeoRecord, GeocodeError> {
        let mut adapter = self.adapter.lock();
        adapter.set_locale(locale);

        tracing::debug!("fetching geo record ip={} locale={}", ip, locale);

        adapter.get_content(ip).map_err(|e| {
            match &e {
                GeocodeError::NoResult(_) => tracing::debug!("no geo record for {}", ip),
                _ => tracing::warn!("geo adapter failed for {}: {}", ip, e),
            }
            e
        })
    }
}

/// Map a raw record into an address, taking names in `locale` only.
///
/// Only the first subdivision is used (as the region) and the physical
/// `country` section wins over `registered_country`. The record's time zone
/// is not surfaced.
pub fn map_record(record: &GeoRecord, locale: &str) -> Address {
    let localized = |name: Option<&str>| name.map(str::to_owned);

    let locality = record
        .city
        .as_ref()
        .and_then(|city| localized(city.name(locale)));

    let region = record
        .subdivisions
        .first()
        .map(|sub| AdminUnit::new(localized(sub.name(locale)), sub.iso_code.clone()))
        .unwrap_or_default();

    let country = record
        .country
        .as_ref()
        .map(|c| AdminUnit::new(localized(c.name(locale)), c.iso_code.clone()))
        .unwrap_or_default();

    let (latitude, longitude) = record
        .location
        .as_ref()
        .map(|loc| (loc.latitude, loc.longitude))
        .unwrap_or((None, None));

    Address {
        latitude,
        longitude,
        bounds: Bounds::undefined(),
        street_number: None,
        street_name: None,
        sub_locality: None,
        locality,
        postal_code: None,
        // no county tier in GeoIP data
        county: AdminUnit::unknown(),
        region,
        country,
        timezone: None,
    }
}

impl<A: GeoAdapter> GeocodingProvider for GeoIpResolver<A> {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn resolve_forward(&self, query: &str, locale: &str) -> Result<Vec<Address>, GeocodeError> {
        let ip: IpAddr = match query.parse() {
            Ok(ip) => ip,
            Err(_) => {
                tracing::debug!("rejecting non-IP query {:?}", query);
                return Err(GeocodeError::unsupported(ADDRESS_LOOKUP_UNSUPPORTED));
            }
        };

        if ip.is_loopback() {
            tracing::debug!("loopback query {}, answering localhost", ip);
            return Ok(vec![Address::localhost()]);
        }

        let record = self.fetch(ip, locale)?;
        let address = map_record(&record, locale);

        tracing::debug!(
            "mapped {} -> locality={:?} country={:?}",
            ip,
            address.locality,
            address.country.code
        );

        Ok(vec![address])
    }

    fn resolve_reverse(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Vec<Address>, GeocodeError> {
        Err(GeocodeError::unsupported(REVERSE_UNSUPPORTED))
    }
}
