//! MaxMind GeoIP Adapter
//!
//! Implements GeoAdapter using a MaxMind GeoIP2 / GeoLite2 City database.

use crate::domain::error::GeocodeError;
use crate::domain::ports::GeoAdapter;
use crate::domain::record::GeoRecord;
use maxminddb::{MaxMindDBError, Reader};
use std::net::IpAddr;
use std::sync::Arc;

const DEFAULT_LOCALE: &str = "en";

/// MaxMind GeoIP adapter.
///
/// Looks IPs up in a `.mmdb` file and trims the names of every returned
/// record down to the configured locale.
pub struct MaxMindAdapter {
    reader: Arc<Reader<Vec<u8>>>,
    locale: String,
}

impl MaxMindAdapter {
    /// Load a GeoIP database from a file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self::with_reader(Arc::new(reader)))
    }

    /// Load a GeoIP database from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> anyhow::Result<Self> {
        let reader = Reader::from_source(bytes)?;
        Ok(Self::with_reader(Arc::new(reader)))
    }

    /// Share an already opened reader, e.g. one per resolver.
    pub fn with_reader(reader: Arc<Reader<Vec<u8>>>) -> Self {
        Self {
            reader,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Database type from the file metadata (e.g. "GeoLite2-City").
    pub fn database_type(&self) -> &str {
        &self.reader.metadata.database_type
    }
}

impl GeoAdapter for MaxMindAdapter {
    fn set_locale(&mut self, locale: &str) {
        self.locale = locale.to_string();
    }

    fn get_content(&self, ip: IpAddr) -> Result<GeoRecord, GeocodeError> {
        let mut record: GeoRecord = match self.reader.lookup(ip) {
            Ok(record) => record,
            Err(MaxMindDBError::AddressNotFoundError(_)) => {
                return Err(GeocodeError::no_result(ip));
            }
            Err(e) => return Err(anyhow::Error::new(e).into()),
        };

        record.retain_locale(&self.locale);
        Ok(record)
    }
}
