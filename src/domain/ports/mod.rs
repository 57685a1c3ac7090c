mod geo_adapter;
mod geocoding_provider;

pub use geo_adapter::GeoAdapter;
pub use geocoding_provider::GeocodingProvider;
