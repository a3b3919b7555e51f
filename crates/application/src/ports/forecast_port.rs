//! Forecast source port
//!
//! Defines the interface for fetching raw short-term and mid-term forecasts.

use async_trait::async_trait;
use domain::{
    BaseDateTime, ForecastItem, GridCoordinate, MidTermLandForecast, MidTermTemperatureForecast,
    RegionCode,
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Short-term forecast items of one release for one grid cell
    async fn short_term_forecast(
        &self,
        grid: GridCoordinate,
        base: &BaseDateTime,
    ) -> Result<Vec<ForecastItem>, ApplicationError>;

    /// Mid-term land forecast; `None` when the release has no record
    ///
    /// `release` is the `YYYYMMDDHHMM` release timestamp.
    async fn mid_term_land_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermLandForecast>, ApplicationError>;

    /// Mid-term temperature forecast; `None` when the release has no record
    async fn mid_term_temperature_forecast(
        &self,
        region: &RegionCode,
        release: &str,
    ) -> Result<Option<MidTermTemperatureForecast>, ApplicationError>;
}
