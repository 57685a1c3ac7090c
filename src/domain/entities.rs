//! Domain Entities - Geocoding results
//!
//! These entities describe what a geocoding provider hands back to callers.
//! Every field is independently nullable; the shape itself is always complete.

use serde::Serialize;

const LOCALHOST: &str = "localhost";

/// Bounding box of a result.
///
/// Point lookups never carry one, so all corners stay unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub south: Option<f64>,
    pub west: Option<f64>,
    pub north: Option<f64>,
    pub east: Option<f64>,
}

impl Bounds {
    /// Bounds with no corners set.
    pub fn undefined() -> Self {
        Self::default()
    }

    /// True only when all four corners are known.
    pub fn is_defined(&self) -> bool {
        self.south.is_some() && self.west.is_some() && self.north.is_some() && self.east.is_some()
    }
}

/// An administrative unit (county, region or country).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminUnit {
    /// Localized name
    pub name: Option<String>,
    /// Short code (ISO 3166 for countries and subdivisions)
    pub code: Option<String>,
}

impl AdminUnit {
    pub fn new(name: Option<String>, code: Option<String>) -> Self {
        Self { name, code }
    }

    /// Unit with neither name nor code.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        self.name.is_none() && self.code.is_none()
    }
}

/// A normalized address: country → region → county → locality.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Address {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub bounds: Bounds,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub sub_locality: Option<String>,
    pub locality: Option<String>,
    pub postal_code: Option<String>,
    pub county: AdminUnit,
    pub region: AdminUnit,
    pub country: AdminUnit,
    pub timezone: Option<String>,
}

impl Address {
    /// Address with every field unknown.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Address reported for loopback IPs, which no GeoIP database covers.
    pub fn localhost() -> Self {
        let localhost = || Some(LOCALHOST.to_string());
        Self {
            locality: localhost(),
            county: AdminUnit::new(localhost(), None),
            region: AdminUnit::new(localhost(), None),
            country: AdminUnit::new(localhost(), None),
            ..Self::default()
        }
    }
}
