use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub flight_api: FlightApiConfig,
    pub session: SessionConfig,
    pub limits: Limits,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Upstream flight-search provider. The key is configuration only and is
/// never embedded in code.
#[derive(Debug, Deserialize, Clone)]
pub struct FlightApiConfig {
    pub base_url: String,
    pub host: String,
    #[serde(default)]
    pub key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: u64,
}

fn default_cookie_name() -> String {
    "wayfare_session".to_string()
}

// Idle expiry: 24 hours, refreshed on every authenticated request.
fn default_session_ttl() -> u64 {
    86_400
}

#[derive(Debug, Deserialize, Clone)]
pub struct Limits {
    #[serde(default = "default_max_details_bytes")]
    pub max_booking_details_bytes: usize,
}

fn default_max_details_bytes() -> usize {
    16 * 1024
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Settings from the environment, e.g. WAYFARE__FLIGHT_API__KEY
            .add_source(config::Environment::with_prefix("WAYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
