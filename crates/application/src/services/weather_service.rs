//! Weather report service
//!
//! Resolves grid cell, release times and region codes for a location,
//! fetches the three forecasts concurrently and merges them into one report.

use std::{fmt, sync::Arc};

use chrono::{NaiveDateTime, Timelike};
use domain::{
    BaseDateTime, DailyForecast, GpsCoordinate, GridCoordinate, RegionCodes,
    forecast::{
        CurrentConditions, DEFAULT_HOURLY_SLOTS, ForecastIndex, HourlySlot, MinMax, merge_weekly,
        mid_term_weekly, short_term_daily,
    },
    projection::gps_to_grid,
    region::resolve_region,
    schedule::{mid_term_release, short_term_base},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::ForecastPort};

/// Everything shown for one location at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: GpsCoordinate,
    pub grid: GridCoordinate,
    /// Short-term release that was queried
    pub base: BaseDateTime,
    /// Mid-term release (`tmFc`) that was queried
    pub mid_term_release: String,
    pub region_codes: RegionCodes,
    /// `None` when the short-term release had no items
    pub current: Option<CurrentConditions>,
    pub min_max: MinMax,
    pub hourly: Vec<HourlySlot>,
    /// Up to eleven days, short-term first
    pub weekly: Vec<DailyForecast>,
    /// Release time formatted for display
    pub last_updated: String,
}

/// Service composing a [`WeatherReport`] from a forecast source
pub struct WeatherService {
    forecast_port: Arc<dyn ForecastPort>,
    hourly_slots: usize,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("hourly_slots", &self.hourly_slots)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(forecast_port: Arc<dyn ForecastPort>) -> Self {
        Self {
            forecast_port,
            hourly_slots: DEFAULT_HOURLY_SLOTS,
        }
    }

    /// Limit the number of hourly slots in a report
    #[must_use]
    pub const fn with_hourly_slots(mut self, hourly_slots: usize) -> Self {
        self.hourly_slots = hourly_slots;
        self
    }

    /// Build the report for `location` as seen at `now` (Korea Standard Time)
    ///
    /// A failing short-term fetch fails the report. Mid-term failures are
    /// logged and leave the report with the short-term days only.
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn report(
        &self,
        location: GpsCoordinate,
        now: NaiveDateTime,
    ) -> Result<WeatherReport, ApplicationError> {
        let grid = gps_to_grid(location);
        let base = short_term_base(now);
        let release = mid_term_release(now);
        let region_codes = resolve_region(location.latitude(), location.longitude());

        info!(
            nx = grid.nx,
            ny = grid.ny,
            base = %base,
            release = %release,
            land = %region_codes.land,
            temperature = %region_codes.temperature,
            "Fetching forecasts"
        );

        let (short_term, land, temperature) = tokio::join!(
            self.forecast_port.short_term_forecast(grid, &base),
            self.forecast_port
                .mid_term_land_forecast(&region_codes.land, &release),
            self.forecast_port
                .mid_term_temperature_forecast(&region_codes.temperature, &release),
        );

        let items = short_term?;
        let land = land.unwrap_or_else(|e| {
            warn!(
                error = %e,
                retryable = e.is_retryable(),
                "Mid-term land forecast unavailable"
            );
            None
        });
        let temperature = temperature.unwrap_or_else(|e| {
            warn!(
                error = %e,
                retryable = e.is_retryable(),
                "Mid-term temperature forecast unavailable"
            );
            None
        });

        debug!(
            items = items.len(),
            land = land.is_some(),
            temperature = temperature.is_some(),
            "Forecasts received"
        );

        let today = now.date();
        let base_date = base.date().unwrap_or(today);
        let base_key = base.base_date.as_str();

        let index = ForecastIndex::new(&items);
        let current = index.current_conditions();
        let min_max = index.daily_min_max(base_key);
        let hourly = index.hourly_series(base_key, now.hour(), self.hourly_slots);
        let weekly = merge_weekly(
            short_term_daily(&items, today),
            mid_term_weekly(land.as_ref(), temperature.as_ref(), base_date),
        );
        let last_updated = base.display();

        Ok(WeatherReport {
            location,
            grid,
            base,
            mid_term_release: release,
            region_codes,
            current,
            min_max,
            hourly,
            weekly,
            last_updated,
        })
    }
}
