//! Days 4–10 from the mid-term forecast, and the merged timeline

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};

use crate::entities::{
    DailyForecast, MidTermLandForecast, MidTermTemperatureForecast, date_label,
};

/// Day offsets taken from the mid-term forecast
pub const MID_TERM_DAYS: RangeInclusive<u32> = 4..=10;

/// Shown when the land forecast has no text for a half-day yet
pub const PENDING_FORECAST: &str = "예보 준비중";

/// Daily forecasts for days 4–10 after `base_date`
///
/// `base_date` is the date of the short-term base time, which differs from
/// the mid-term release date between 02:10 and 06:00. Missing weather text
/// reads as [`PENDING_FORECAST`], missing numbers as zero. Returns an empty
/// list when either record is absent, otherwise exactly seven entries.
#[must_use]
pub fn mid_term_weekly(
    land: Option<&MidTermLandForecast>,
    temperature: Option<&MidTermTemperatureForecast>,
    base_date: NaiveDate,
) -> Vec<DailyForecast> {
    let (Some(land), Some(temperature)) = (land, temperature) else {
        return Vec::new();
    };

    MID_TERM_DAYS
        .filter_map(|day| {
            let date = base_date.checked_add_days(Days::new(u64::from(day)))?;
            let outlook = land.outlook(day);
            let (min, max) = temperature.range(day);

            Some(DailyForecast {
                date,
                label: date_label(date),
                weather_am: outlook.weather_am.unwrap_or(PENDING_FORECAST).to_string(),
                weather_pm: outlook.weather_pm.unwrap_or(PENDING_FORECAST).to_string(),
                temperature_min: min.unwrap_or(0.0),
                temperature_max: max.unwrap_or(0.0),
                rain_probability_am: outlook.rain_am.unwrap_or(0),
                rain_probability_pm: outlook.rain_pm.unwrap_or(0),
            })
        })
        .collect()
}

/// Short-term days followed by mid-term days
///
/// No overlap check is made; both halves must be computed for the same day
/// for the timeline to be contiguous.
#[must_use]
pub fn merge_weekly(
    mut short_term: Vec<DailyForecast>,
    mid_term: Vec<DailyForecast>,
) -> Vec<DailyForecast> {
    short_term.extend(mid_term);
    short_term
}
