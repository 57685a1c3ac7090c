//! Geocoding errors

use std::net::IpAddr;

/// Failure modes of a geocoding request.
///
/// Callers tell caller misuse (`UnsupportedOperation`) apart from a valid IP
/// with no data (`NoResult`) and from adapter or environment trouble
/// (`Adapter`).
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The provider cannot serve this kind of request.
    #[error("{0}")]
    UnsupportedOperation(String),

    /// The backing store has no entry for a valid IP.
    #[error("{0}")]
    NoResult(String),

    /// Adapter-level failure, surfaced as-is.
    #[error(transparent)]
    Adapter(#[from] anyhow::Error),
}

impl GeocodeError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    /// `NoResult` naming the queried IP.
    pub fn no_result(ip: IpAddr) -> Self {
        Self::NoResult(format!("no results found for IP address {}", ip))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation(_))
    }

    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResult(_))
    }
}
