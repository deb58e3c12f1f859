use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_geocode::errors::GeocodeError;
use crate::manager_nws::errors::NWSError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<GeocodeError> for UnrecoverableError {
    fn from(e: GeocodeError) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<NWSError> for UnrecoverableError {
    fn from(e: NWSError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Errors while turning a form submission into a weekly forecast
///
/// `InvalidInput` and `LocationNotFound` are meant for the user, `Upstream` carries
/// details that only belong in the log.
#[derive(Debug)]
pub enum ForecastError {
    InvalidInput(String),
    LocationNotFound(String),
    Upstream(String),
}

impl ForecastError {
    /// Message safe to show in the rendered page
    ///
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::InvalidInput(e) => e.clone(),
            ForecastError::LocationNotFound(city) => format!("Could not find a location named '{}'", city),
            ForecastError::Upstream(_) => "The weather service is unavailable right now, please try again later".to_string(),
        }
    }
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InvalidInput(e) => write!(f, "ForecastError::InvalidInput: {}", e),
            ForecastError::LocationNotFound(e) => write!(f, "ForecastError::LocationNotFound: {}", e),
            ForecastError::Upstream(e) => write!(f, "ForecastError::Upstream: {}", e),
        }
    }
}
impl From<GeocodeError> for ForecastError {
    fn from(e: GeocodeError) -> Self { ForecastError::Upstream(e.to_string()) }
}
impl From<NWSError> for ForecastError {
    fn from(e: NWSError) -> Self { ForecastError::Upstream(e.to_string()) }
}
