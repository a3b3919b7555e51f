//! KMA forecast client
//!
//! HTTP client for the village forecast service (`VilageFcstInfoService_2.0`)
//! and the mid-term forecast service (`MidFcstInfoService`).

use std::fmt;

use async_trait::async_trait;
use domain::{
    BaseDateTime, ForecastItem, GridCoordinate, MidTermLandForecast, MidTermTemperatureForecast,
    RegionCode,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiResponse, ObservationItem, ResultCode};

/// Rows requested from the village forecast service; one release fits
const SHORT_TERM_ROWS: &str = "1000";

/// Rows requested from the mid-term service; one record per region
const MID_TERM_ROWS: &str = "10";

/// KMA client errors
#[derive(Debug, Error)]
pub enum KmaError {
    /// Connection to the forecast service failed or timed out
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the forecast service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service answered with a non-success result code
    #[error("API error {code}: {message}")]
    ApiError { code: String, message: String },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl KmaError {
    /// Whether repeating the request may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::ServiceUnavailable(_) | Self::RateLimitExceeded
        )
    }
}

/// KMA client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct KmaConfig {
    /// Decoded service key issued by data.go.kr
    #[serde(default)]
    pub service_key: String,

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
    "https://apis.data.go.kr/1360000/VilageFcstInfoService_2.0".to_string()
}

fn default_mid_term_base_url() -> String {
    "https://apis.data.go.kr/1360000/MidFcstInfoService".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for KmaConfig {
    fn default() -> Self {
        Self {
            service_key: String::new(),
            short_term_base_url: default_short_term_base_url(),
            mid_term_base_url: default_mid_term_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for KmaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KmaConfig")
            .field("service_key", &"[REDACTED]")
            .field("short_term_base_url", &self.short_term_base_url)
            .field("mid_term_base_url", &self.mid_term_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Client for the KMA forecast endpoints
#[async_trait]
pub trait KmaClient: Send + Sync {
    /// Village forecast (`getVilageFcst`) for one release
    async fn short_term_forecast(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ForecastItem>, KmaError>;

    /// Current observations (`getUltraSrtNcst`)
    async fn ultra_short_term_status(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ObservationItem>, KmaError>;

    /// Six-hour ultra short-term forecast (`getUltraSrtFcst`)
    async fn ultra_short_term_forecast(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ForecastItem>, KmaError>;

    /// Mid-term land forecast (`getMidLandFcst`), `None` when not published
    async fn mid_term_land_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermLandForecast>, KmaError>;

    /// Mid-term temperature forecast (`getMidTa`), `None` when not published
    async fn mid_term_temperature_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermTemperatureForecast>, KmaError>;
}

/// KMA HTTP client implementation
#[derive(Debug)]
pub struct KmaHttpClient {
    client: Client,
    config: KmaConfig,
}

impl KmaHttpClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: KmaConfig) -> Result<Self, KmaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| KmaError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(base_url: &str, operation: &str) -> String {
        format!("{}/{operation}", base_url.trim_end_matches('/'))
    }

    fn grid_query(&self, grid: GridCoordinate, base: &BaseDateTime) -> Vec<(&'static str, String)> {
        vec![
            ("serviceKey", self.config.service_key.clone()),
            ("pageNo", "1".to_string()),
            ("numOfRows", SHORT_TERM_ROWS.to_string()),
            ("dataType", "JSON".to_string()),
            ("base_date", base.base_date.clone()),
            ("base_time", base.base_time.clone()),
            ("nx", grid.nx.to_string()),
            ("ny", grid.ny.to_string()),
        ]
    }

    fn region_query(&self, region: &RegionCode, release: &str) -> Vec<(&'static str, String)> {
        vec![
            ("serviceKey", self.config.service_key.clone()),
            ("pageNo", "1".to_string()),
            ("numOfRows", MID_TERM_ROWS.to_string()),
            ("dataType", "JSON".to_string()),
            ("regId", region.as_str().to_string()),
            ("tmFc", release.to_string()),
        ]
    }

    /// Fetch an endpoint and unwrap the response envelope
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<T>, KmaError> {
        debug!(url = %url, "Requesting KMA endpoint");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    KmaError::ConnectionFailed(e.to_string())
                } else {
                    KmaError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(KmaError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(KmaError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(KmaError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| KmaError::RequestFailed(e.to_string()))?;

        Self::parse_body(&body)
    }

    /// Decode a response body
    ///
    /// Gateway errors (invalid key, quota) come back as XML even when JSON
    /// was requested.
    fn parse_body<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, KmaError> {
        if body.trim_start().starts_with('<') {
            return Err(Self::parse_gateway_error(body));
        }

        let api_response: ApiResponse<T> =
            serde_json::from_str(body).map_err(|e| KmaError::ParseError(e.to_string()))?;

        match api_response.result() {
            (ResultCode::NORMAL, _) => Ok(api_response.into_items()),
            (ResultCode::NO_DATA, message) => {
                debug!(message = %message, "No data for request");
                Ok(Vec::new())
            },
            (ResultCode::LIMIT_EXCEEDED, _) => Err(KmaError::RateLimitExceeded),
            (code, message) => {
                warn!(code = %code, message = %message, "KMA returned an error result");
                Err(KmaError::ApiError {
                    code: code.to_string(),
                    message: message.to_string(),
                })
            },
        }
    }

    fn parse_gateway_error(body: &str) -> KmaError {
        let tag = |name: &str| {
            let open = format!("<{name}>");
            let close = format!("</{name}>");
            let start = body.find(&open)? + open.len();
            let end = body[start..].find(&close)? + start;
            Some(body[start..end].trim().to_string())
        };

        match (tag("returnReasonCode"), tag("returnAuthMsg")) {
            (Some(code), _) if code == ResultCode::LIMIT_EXCEEDED => KmaError::RateLimitExceeded,
            (Some(code), message) => KmaError::ApiError {
                code,
                message: message.unwrap_or_default(),
            },
            (None, _) => KmaError::ParseError("Unexpected XML response".to_string()),
        }
    }
}

#[async_trait]
impl KmaClient for KmaHttpClient {
    #[instrument(skip(self, base), fields(nx = grid.nx, ny = grid.ny, base = %base))]
    async fn short_term_forecast(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ForecastItem>, KmaError> {
        let url = Self::endpoint(&self.config.short_term_base_url, "getVilageFcst");
        self.fetch(&url, &self.grid_query(grid, base)).await
    }

    #[instrument(skip(self, base), fields(nx = grid.nx, ny = grid.ny, base = %base))]
    async fn ultra_short_term_status(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ObservationItem>, KmaError> {
        let url = Self::endpoint(&self.config.short_term_base_url, "getUltraSrtNcst");
        self.fetch(&url, &self.grid_query(grid, base)).await
    }

    #[instrument(skip(self, base), fields(nx = grid.nx, ny = grid.ny, base = %base))]
    async fn ultra_short_term_forecast(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ForecastItem>, KmaError> {
        let url = Self::endpoint(&self.config.short_term_base_url, "getUltraSrtFcst");
        self.fetch(&url, &self.grid_query(grid, base)).await
    }

    #[instrument(skip(self, region), fields(region = %region))]
    async fn mid_term_land_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermLandForecast>, KmaError> {
        let url = Self::endpoint(&self.config.mid_term_base_url, "getMidLandFcst");
        let items = self.fetch(&url, &self.region_query(region, release)).await?;
        Ok(items.into_iter().next())
    }

    #[instrument(skip(self, region), fields(region = %region))]
    async fn mid_term_temperature_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermTemperatureForecast>, KmaError> {
        let url = Self::endpoint(&self.config.mid_term_base_url, "getMidTa");
        let items = self.fetch(&url, &self.region_query(region, release)).await?;
        Ok(items.into_iter().next())
    }
}
