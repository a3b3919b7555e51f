//! Application configuration
//!
//! Split into focused sub-modules:
//! - `kma`: service key and endpoints of the forecast API
//! - `cache`: forecast cache TTLs
//! - `location`: default location and saved favorites
//! - `telemetry`: log filter and output format
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `HANUL_`-prefixed environment variables with `__` between nested
//! keys (e.g. `HANUL_KMA__SERVICE_KEY`).

mod cache;
mod kma;
mod location;
mod telemetry;

use std::path::Path;

use domain::{DomainError, FavoriteList, GpsCoordinate};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use cache::CacheConfig;
pub use kma::KmaAppConfig;
pub use location::{FavoriteEntry, LocationConfig};
pub use telemetry::TelemetryAppConfig;

use crate::retry::RetryConfig;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "HANUL";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Forecast API configuration
    #[serde(default)]
    pub kma: KmaAppConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Retry configuration for forecast requests
    #[serde(default)]
    pub retry: RetryConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,

    /// Location used when none is given (Seoul City Hall when absent)
    #[serde(default)]
    pub default_location: Option<LocationConfig>,

    /// Saved locations
    #[serde(default)]
    pub favorites: Vec<FavoriteEntry>,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, then the environment
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        debug!(path = %path.display(), "Loading configuration file");
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// The configured default location, or Seoul City Hall
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for an out-of-range location.
    pub fn default_location(&self) -> Result<GpsCoordinate, DomainError> {
        self.default_location
            .as_ref()
            .map_or(Ok(GpsCoordinate::seoul_city_hall()), LocationConfig::coordinate)
    }

    /// Saved locations as a validated list
    ///
    /// # Errors
    ///
    /// Fails on invalid coordinates, duplicate addresses or more entries
    /// than the list can hold.
    pub fn favorite_list(&self) -> Result<FavoriteList, DomainError> {
        let mut list = FavoriteList::new();
        for entry in &self.favorites {
            list.add(&entry.name, &entry.address, entry.location()?)?;
        }
        Ok(list)
    }
}
