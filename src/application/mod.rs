mod geoip_resolver;

pub use geoip_resolver::{map_record, GeoIpResolver};
