//! Tracing subscriber setup
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryAppConfig;

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    /// A global subscriber is already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` wins over the configured directive
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` for an unparsable directive.
pub fn env_filter(config: &TelemetryAppConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_filter).map_err(|e| TelemetryError::InvalidFilter {
        filter: config.log_filter.clone(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Fails on an invalid filter or when called twice.
pub fn init_tracing(config: &TelemetryAppConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
    });
    let text_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %config.log_filter, json = config.json, "Tracing initialized");
    Ok(())
}
