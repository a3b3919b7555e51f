//! Forecast cache configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long fetched forecasts are reused
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// TTL of short-term responses in seconds (default: 30 minutes)
    #[serde(default = "default_short_term_ttl")]
    pub short_term_ttl_secs: u64,

    /// TTL of mid-term responses in seconds (default: 1 hour)
    #[serde(default = "default_mid_term_ttl")]
    pub mid_term_ttl_secs: u64,

    /// Maximum number of entries per cache
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_short_term_ttl() -> u64 {
    30 * 60
}

const fn default_mid_term_ttl() -> u64 {
    60 * 60
}

const fn default_max_entries() -> u64 {
    256
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            short_term_ttl_secs: default_short_term_ttl(),
            mid_term_ttl_secs: default_mid_term_ttl(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// Get the short-term TTL as a Duration
    #[must_use]
    pub const fn short_term_ttl(&self) -> Duration {
        Duration::from_secs(self.short_term_ttl_secs)
    }

    /// Get the mid-term TTL as a Duration
    #[must_use]
    pub const fn mid_term_ttl(&self) -> Duration {
        Duration::from_secs(self.mid_term_ttl_secs)
    }
}
