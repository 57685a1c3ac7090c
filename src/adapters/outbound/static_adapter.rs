//! Static GeoIP Adapter
//!
//! Implements GeoAdapter over an in-memory table of records, loadable from
//! GeoIP2 JSON documents. Useful for fixtures and offline operation.

use crate::domain::error::GeocodeError;
use crate::domain::ports::GeoAdapter;
use crate::domain::record::GeoRecord;
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::net::IpAddr;

/// In-memory GeoIP adapter.
#[derive(Debug, Clone, Default)]
pub struct StaticAdapter {
    records: HashMap<IpAddr, GeoRecord>,
    locale: Option<String>,
}

impl StaticAdapter {
    /// Create an empty adapter; every lookup yields no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the record for an IP.
    pub fn insert(&mut self, ip: IpAddr, record: GeoRecord) -> &mut Self {
        self.records.insert(ip, record);
        self
    }

    /// Build from a JSON object mapping IP strings to GeoIP2 records.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let raw: BTreeMap<String, GeoRecord> =
            serde_json::from_str(json).context("invalid GeoIP fixtures JSON")?;

        let mut adapter = Self::new();
        for (key, record) in raw {
            let ip: IpAddr = key
                .parse()
                .with_context(|| format!("invalid IP address key {:?}", key))?;
            adapter.insert(ip, record);
        }
        Ok(adapter)
    }

    /// Load fixtures from a JSON file.
    pub fn from_json_file(path: &str) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read GeoIP fixtures from {}", path))?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Locale set by the last request, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

impl GeoAdapter for StaticAdapter {
    fn set_locale(&mut self, locale: &str) {
        self.locale = Some(locale.to_string());
    }

    fn get_content(&self, ip: IpAddr) -> Result<GeoRecord, GeocodeError> {
        let mut record = self
            .records
            .get(&ip)
            .cloned()
            .ok_or_else(|| GeocodeError::no_result(ip))?;

        if let Some(locale) = &self.locale {
            record.retain_locale(locale);
        }
        Ok(record)
    }
}
