//! geoip-geocoder - resolve IP addresses to normalized addresses
//!
//! This is the composition root that wires together all the components.
//! Each command-line argument is resolved and printed as JSON.

use geoip_geocoder::adapters::outbound::{MaxMindAdapter, StaticAdapter};
use geoip_geocoder::application::GeoIpResolver;
use geoip_geocoder::config::{load_config, Config};
use geoip_geocoder::domain::ports::{GeoAdapter, GeocodingProvider};
use tracing_subscriber::fmt::format::FmtSpan;

fn build_adapter(cfg: &Config) -> anyhow::Result<Box<dyn GeoAdapter>> {
    if let Some(path) = &cfg.db_path {
        let adapter = MaxMindAdapter::from_file(path)?;
        tracing::info!(
            "GeoIP DB loaded from {} (type={})",
            path,
            adapter.database_type()
        );
        return Ok(Box::new(adapter));
    }

    let adapter = match &cfg.fixtures_path {
        Some(path) => {
            let adapter = StaticAdapter::from_json_file(path)?;
            tracing::info!("GeoIP fixtures loaded from {} ({} records)", path, adapter.len());
            adapter
        }
        None => {
            tracing::warn!("no GeoIP database configured, every lookup will return no result");
            StaticAdapter::new()
        }
    };
    Ok(Box::new(adapter))
}

fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    let resolver = GeoIpResolver::new(build_adapter(&cfg)?);

    tracing::info!("starting {} resolver locale={}", resolver.name(), cfg.locale);

    let mut failures = 0usize;
    for query in std::env::args().skip(1) {
        match resolver.resolve_forward(&query, &cfg.locale) {
            Ok(addresses) => {
                let out = serde_json::json!({ "query": query, "addresses": addresses });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            Err(e) => {
                tracing::error!("{}: {}", query, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} queries failed", failures);
    }
    Ok(())
}
