//! Domain layer: entities, raw records, errors and ports.
//! No I/O happens here.

pub mod entities;
pub mod error;
pub mod ports;
pub mod record;
