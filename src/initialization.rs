use std::env;
use std::fs;
use std::time::Duration;
use log::{info, LevelFilter};
use serde::Deserialize;
use crate::daily_aggregator::DEFAULT_MAX_DAYS;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct Providers {
    pub geocode_url: String,
    pub nws_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Providers {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize)]
pub struct Forecast {
    #[serde(default = "default_max_days")]
    pub max_days: usize,
}

fn default_max_days() -> usize {
    DEFAULT_MAX_DAYS
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServer,
    pub providers: Providers,
    pub forecast: Forecast,
    pub general: General,
}

/// Loads the configuration file given by the CONFIG_PATH environment variable
/// (config.toml if not set) and sets up logging
///
pub fn config() -> Result<Config, ConfigError> {
    let config_path = env::var("CONFIG_PATH").unwrap_or("config.toml".to_string());
    let config = load_config(&config_path)?;

    setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;
    info!("weatherform version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.forecast.max_days == 0 {
        return Err(ConfigError::from("forecast.max_days must be at least 1"));
    }
    if config.providers.user_agent.trim().is_empty() {
        return Err(ConfigError::from("providers.user_agent must not be empty"));
    }

    Ok(config)
}
