//! Forecast API configuration

use application::ApplicationError;
use integration_kma::KmaConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// KMA open API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmaAppConfig {
    /// Decoded service key from data.go.kr (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub service_key: Option<SecretString>,

    /// Village forecast service base URL
    #[serde(default = "default_short_term_base_url")]
    pub short_term_base_url: String,

    /// Mid-term forecast service base URL
    #[serde(default = "default_mid_term_base_url")]
    pub mid_term_base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_short_term_base_url() -> String {
    KmaConfig::default().short_term_base_url
}

fn default_mid_term_base_url() -> String {
    KmaConfig::default().mid_term_base_url
}

fn default_timeout() -> u64 {
    KmaConfig::default().timeout_secs
}

impl Default for KmaAppConfig {
    fn default() -> Self {
        Self {
            service_key: None,
            short_term_base_url: default_short_term_base_url(),
            mid_term_base_url: default_mid_term_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl KmaAppConfig {
    /// Convert to the client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when no service key is set.
    pub fn to_client_config(&self) -> Result<KmaConfig, ApplicationError> {
        let service_key = self
            .service_key
            .as_ref()
            .map(|key| key.expose_secret().trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ApplicationError::Configuration(
                    "kma.service_key is not set (HANUL_KMA__SERVICE_KEY)".to_string(),
                )
            })?;

        Ok(KmaConfig {
            service_key,
            short_term_base_url: self.short_term_base_url.clone(),
            mid_term_base_url: self.mid_term_base_url.clone(),
            timeout_secs: self.timeout_secs,
        })
    }
}
