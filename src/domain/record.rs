//! Raw GeoIP records
//!
//! The loosely structured data an adapter returns for one IP. Every section
//! and every field is optional; absence means "unknown", never an error.
//! Field names follow the GeoIP2 database layout so the same types
//! deserialize from `.mmdb` lookups and from GeoIP2 JSON documents.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Localized names keyed by language tag ("en", "de", "pt-BR", ...).
pub type Names = BTreeMap<String, String>;

/// A place known only by its localized names (e.g. a city).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamedPlace {
    pub geoname_id: Option<u32>,
    pub names: Names,
}

impl NamedPlace {
    /// Name in exactly the requested locale.
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.names.get(locale).map(String::as_str)
    }
}

/// A coded place: continent, country or subdivision.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Place {
    pub geoname_id: Option<u32>,
    /// ISO code; continents publish theirs under `code`
    #[serde(alias = "code")]
    pub iso_code: Option<String>,
    pub names: Names,
}

impl Place {
    /// Name in exactly the requested locale.
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.names.get(locale).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy_radius: Option<u16>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Postal {
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Traits {
    pub ip_address: Option<String>,
}

/// Geolocation data for a single IP address.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeoRecord {
    pub city: Option<NamedPlace>,
    pub continent: Option<Place>,
    pub country: Option<Place>,
    pub registered_country: Option<Place>,
    pub subdivisions: Vec<Place>,
    pub location: Option<Location>,
    pub postal: Option<Postal>,
    pub traits: Option<Traits>,
}

impl GeoRecord {
    /// Parse a GeoIP2 JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// True when the record carries no section at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Drop every localized name that is not in `locale`.
    pub fn retain_locale(&mut self, locale: &str) {
        let keep = |names: &mut Names| names.retain(|lang, _| lang == locale);

        if let Some(city) = self.city.as_mut() {
            keep(&mut city.names);
        }
        for place in [
            self.continent.as_mut(),
            self.country.as_mut(),
            self.registered_country.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            keep(&mut place.names);
        }
        for sub in &mut self.subdivisions {
            keep(&mut sub.names);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const HAMBURG: &str = r#"{
        "city": {"geoname_id": 2911298, "names": {"de": "Hamburg", "en": "Hamburg", "es": "Hamburgo"}},
        "continent": {"code": "EU", "geoname_id": 6255148, "names": {"de": "Europa", "en": "Europe"}},
        "country": {"geoname_id": 2921044, "iso_code": "DE", "names": {"de": "Deutschland", "en": "Germany"}},
        "location": {"latitude": 53.55, "longitude": 10, "time_zone": "Europe/Berlin"},
        "registered_country": {"geoname_id": 2921044, "iso_code": "DE", "names": {"en": "Germany"}},
        "subdivisions": [{"geoname_id": 2911297, "iso_code": "HH", "names": {"de": "Hamburg", "en": "Hamburg"}}],
        "traits": {"ip_address": "74.200.247.59"}
    }"#;

    #[test]
    fn test_parse_full_record() {
        let record = GeoRecord::from_json(HAMBURG).unwrap();

        assert_eq!(record.city.as_ref().unwrap().name("es"), Some("Hamburgo"));
        assert_eq!(record.continent.as_ref().unwrap().iso_code.as_deref(), Some("EU"));
        assert_eq!(record.country.as_ref().unwrap().iso_code.as_deref(), Some("DE"));
        assert_eq!(record.subdivisions.len(), 1);

        let location = record.location.as_ref().unwrap();
        assert_eq!(location.latitude, Some(53.55));
        assert_eq!(location.longitude, Some(10.0));
        assert_eq!(location.time_zone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(
            record.traits.unwrap().ip_address.as_deref(),
            Some("74.200.247.59")
        );
    }

    #[test]
    fn test_parse_empty_record() {
        let record = GeoRecord::from_json("{}").unwrap();
        assert!(record.is_empty());
        assert!(record.subdivisions.is_empty());
    }

    #[test]
    fn test_parse_ignores_unknown_sections() {
        let record =
            GeoRecord::from_json(r#"{"maxmind": {"queries_remaining": 10}, "postal": {"code": "20095"}}"#)
                .unwrap();
        assert_eq!(record.postal.unwrap().code.as_deref(), Some("20095"));
    }

    #[test]
    fn test_parse_section_without_names() {
        let record = GeoRecord::from_json(r#"{"country": {"iso_code": "FR"}}"#).unwrap();
        let country = record.country.unwrap();
        assert!(country.names.is_empty());
        assert_eq!(country.name("en"), None);
    }

    #[test]
    fn test_name_has_no_locale_fallback() {
        let record = GeoRecord::from_json(HAMBURG).unwrap();
        assert_eq!(record.country.as_ref().unwrap().name("ja"), None);
        assert_eq!(record.country.as_ref().unwrap().name("EN"), None);
    }

    #[test]
    fn test_retain_locale() {
        let mut record = GeoRecord::from_json(HAMBURG).unwrap();
        record.retain_locale("de");

        let city = record.city.as_ref().unwrap();
        assert_eq!(city.names.len(), 1);
        assert_eq!(city.name("de"), Some("Hamburg"));
        assert_eq!(record.country.as_ref().unwrap().name("de"), Some("Deutschland"));
        assert_eq!(record.country.as_ref().unwrap().name("en"), None);
        assert!(record.registered_country.as_ref().unwrap().names.is_empty());
        assert_eq!(record.subdivisions[0].names.len(), 1);
        // codes are untouched
        assert_eq!(record.subdivisions[0].iso_code.as_deref(), Some("HH"));
    }
}
