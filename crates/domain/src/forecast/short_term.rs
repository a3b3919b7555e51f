//! Daily summaries for today and the next three days

use std::collections::HashMap;
use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};

use super::conditions::weather_text;
use super::index::ForecastIndex;
use crate::entities::{Category, DailyForecast, ForecastItem, date_label};

/// Day offsets covered by the short-term forecast
pub const SHORT_TERM_DAYS: RangeInclusive<u64> = 0..=3;

/// Morning bucket hours
const MORNING: RangeInclusive<u32> = 6..=11;

/// Afternoon bucket hours
const AFTERNOON: RangeInclusive<u32> = 12..=18;

/// Worst-case values of one half-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HalfDay {
    sky: i32,
    precipitation: i32,
    probability: u8,
}

impl HalfDay {
    /// Most severe sky and precipitation codes and the highest probability
    ///
    /// Values that do not parse are skipped.
    fn worst_of<'a>(items: impl Iterator<Item = &'a ForecastItem> + Clone) -> Self {
        let max_of = |category: Category| {
            items
                .clone()
                .filter(|item| item.category == category)
                .filter_map(|item| item.fcst_value.trim().parse::<i32>().ok())
                .max()
        };

        Self {
            sky: max_of(Category::Sky).unwrap_or(1),
            precipitation: max_of(Category::PrecipitationType).unwrap_or(0),
            probability: max_of(Category::PrecipitationProbability)
                .and_then(|p| u8::try_from(p.clamp(0, 100)).ok())
                .unwrap_or(0),
        }
    }

    fn text(self) -> String {
        weather_text(self.precipitation, self.sky).to_string()
    }
}

/// Round half up, matching how the forecast site displays temperatures
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn parse_temperature(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Daily forecasts for `today` and the three following days
///
/// Morning covers 06–11h and afternoon 12–18h; each half takes the cloudiest
/// sky, the most severe precipitation type and the highest probability.
/// Minimum and maximum come from `TMN`/`TMX`, falling back to the rounded
/// range of the hourly `TMP` values when either is missing. Days without
/// any item are skipped, so fewer than four entries may be returned.
#[must_use]
pub fn short_term_daily(items: &[ForecastItem], today: NaiveDate) -> Vec<DailyForecast> {
    let index = ForecastIndex::new(items);

    let mut by_date: HashMap<&str, Vec<&ForecastItem>> = HashMap::new();
    for item in items {
        by_date.entry(item.fcst_date.as_str()).or_default().push(item);
    }

    SHORT_TERM_DAYS
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter_map(|date| {
            let key = date.format("%Y%m%d").to_string();
            let day_items = by_date.get(key.as_str())?;

            let morning = HalfDay::worst_of(in_hours(day_items, MORNING));
            let afternoon = HalfDay::worst_of(in_hours(day_items, AFTERNOON));

            let (temperature_min, temperature_max) = daily_range(&index, &key, day_items);

            Some(DailyForecast {
                date,
                label: date_label(date),
                weather_am: morning.text(),
                weather_pm: afternoon.text(),
                temperature_min,
                temperature_max,
                rain_probability_am: morning.probability,
                rain_probability_pm: afternoon.probability,
            })
        })
        .collect()
}

fn in_hours<'a>(
    items: &'a [&'a ForecastItem],
    hours: RangeInclusive<u32>,
) -> impl Iterator<Item = &'a ForecastItem> + Clone + 'a {
    items
        .iter()
        .copied()
        .filter(move |item| item.hour().is_some_and(|h| hours.contains(&h)))
}

fn daily_range(index: &ForecastIndex<'_>, date: &str, day_items: &[&ForecastItem]) -> (f64, f64) {
    let tmn = parse_temperature(index.first_of_day(Category::DailyMinimum, date));
    let tmx = parse_temperature(index.first_of_day(Category::DailyMaximum, date));
    if let (Some(min), Some(max)) = (tmn, tmx) {
        return (min, max);
    }

    let hourly = day_items
        .iter()
        .filter(|item| item.category == Category::Temperature)
        .filter_map(|item| parse_temperature(&item.fcst_value));
    let range = hourly.fold(None, |acc: Option<(f64, f64)>, t| match acc {
        Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        None => Some((t, t)),
    });

    match range {
        Some((lo, hi)) => (round_half_up(lo), round_half_up(hi)),
        None => (tmn.unwrap_or(0.0), tmx.unwrap_or(0.0)),
    }
}
