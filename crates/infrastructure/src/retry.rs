//! Retry with exponential backoff
//!
//! Forecast requests are retried when the failure is transient (timeouts,
//! 5xx, quota). Delays grow exponentially, are capped, and carry random
//! jitter so concurrent callers do not retry in lockstep.

use std::future::Future;
use std::time::Duration;

use integration_kma::KmaError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configuration for retry behavior with exponential backoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt (default: 1)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds (default: 200ms)
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Upper bound for any delay in milliseconds (default: 2000ms)
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Whether to randomize delays (default: true)
    #[serde(default = "default_true")]
    pub jitter: bool,

    /// Maximum jitter as a fraction of the delay (default: 0.1)
    #[serde(default = "default_jitter_factor")]
    pub jitter_factor: f64,
}

const fn default_max_retries() -> u32 {
    1
}

const fn default_initial_delay() -> u64 {
    200
}

const fn default_max_delay() -> u64 {
    2_000
}

const fn default_multiplier() -> f64 {
    2.0
}

const fn default_true() -> bool {
    true
}

const fn default_jitter_factor() -> f64 {
    0.1
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay(),
            max_delay_ms: default_max_delay(),
            multiplier: default_multiplier(),
            jitter: default_true(),
            jitter_factor: default_jitter_factor(),
        }
    }
}

impl RetryConfig {
    /// No retries at all
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Disable jitter
    #[must_use]
    pub const fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Delay before retry number `attempt` (0-indexed)
    ///
    /// `initial_delay * multiplier^attempt`, capped at `max_delay`, then
    /// jittered by up to `jitter_factor` in either direction.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.min(i32::MAX as u32) as i32;
        let base = (self.initial_delay_ms as f64) * self.multiplier.powi(exponent);
        let capped = base.min(self.max_delay_ms as f64);

        let delay = if self.jitter && capped > 0.0 {
            let factor = if self.jitter_factor.is_finite() {
                self.jitter_factor.clamp(0.0, 1.0)
            } else {
                0.0
            };
            let range = capped * factor;
            (capped + rand::rng().random_range(-range..=range)).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(delay as u64)
    }
}

/// Errors that can be checked for retryability
pub trait Retryable {
    /// Returns true if repeating the operation may succeed
    fn is_retryable(&self) -> bool;
}

impl Retryable for KmaError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

/// Run `operation`, retrying retryable failures per `config`
///
/// Returns the first success, the first non-retryable error, or the last
/// error once retries are exhausted.
#[allow(clippy::cast_possible_truncation)]
pub async fn retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retries");
                }
                return Ok(value);
            },
            Err(err) if !err.is_retryable() => {
                debug!(error = %err, "Operation failed with non-retryable error");
                return Err(err);
            },
            Err(err) if attempt >= config.max_retries => {
                warn!(
                    attempts = attempt + 1,
                    error = %err,
                    "Operation failed after max retries"
                );
                return Err(err);
            },
            Err(err) => {
                let delay = config.delay_for_attempt(attempt);
                warn!(
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            },
        }
    }
}
