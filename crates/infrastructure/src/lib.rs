//! Infrastructure layer - Adapters for external systems
//!
//! Implements the forecast port on top of the KMA client and provides
//! configuration loading, tracing setup and retry with backoff.

pub mod adapters;
pub mod config;
pub mod retry;
pub mod telemetry;

pub use adapters::KmaForecastAdapter;
pub use config::{
    AppConfig, CacheConfig, FavoriteEntry, KmaAppConfig, LocationConfig, TelemetryAppConfig,
};
pub use retry::{RetryConfig, Retryable, retry};
pub use telemetry::{TelemetryError, init_tracing};
