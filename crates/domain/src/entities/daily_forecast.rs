//! One day of the weekly timeline

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A day of the merged 11-day forecast
///
/// Short-term (days 0–3) and mid-term (days 4–10) forecasts produce this
/// same shape so the two ranges concatenate without gaps in the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date
    pub date: NaiveDate,
    /// Display label, `M/D 요일`
    pub label: String,
    /// Morning weather text
    pub weather_am: String,
    /// Afternoon weather text
    pub weather_pm: String,
    /// Minimum temperature (°C)
    pub temperature_min: f64,
    /// Maximum temperature (°C)
    pub temperature_max: f64,
    /// Morning rain probability (%)
    pub rain_probability_am: u8,
    /// Afternoon rain probability (%)
    pub rain_probability_pm: u8,
}

/// Korean single-character weekday name
#[must_use]
pub const fn weekday_ko(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "일",
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
    }
}

/// Label shown for a day, e.g. `10/18 일`
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    format!(
        "{}/{} {}",
        date.month(),
        date.day(),
        weekday_ko(date.weekday())
    )
}
