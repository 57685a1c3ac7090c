use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// MaxMind City database; when unset the static adapter is used
    pub db_path: Option<String>,
    /// JSON file mapping IPs to GeoIP2 records, for the static adapter
    pub fixtures_path: Option<String>,
    pub locale: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            fixtures_path: None,
            locale: "en".to_string(),
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let db_path = std::env::var("GEOIP_DB_PATH").ok();

    let fixtures_path = std::env::var("GEOIP_FIXTURES_PATH").ok();

    let locale = std::env::var("GEOIP_LOCALE")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "en".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        db_path,
        fixtures_path,
        locale,
        debug,
    })
}
