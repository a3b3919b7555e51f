//! Lookup index over one short-term response

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::entities::{Category, ForecastItem};

/// Number of hourly slots returned when the caller has no preference
pub const DEFAULT_HOURLY_SLOTS: usize = 24;

/// Values at the first slot of a response
///
/// Each field is the raw `fcstValue`, or empty when the category is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub date: String,
    pub time: String,
    pub temperature: String,
    pub sky: String,
    pub precipitation_type: String,
    pub precipitation_probability: String,
    pub hourly_precipitation: String,
    pub humidity: String,
    pub wind_speed: String,
}

/// Daily minimum and maximum (`TMN` / `TMX`), empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: String,
    pub max: String,
}

/// One entry of the hourly series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySlot {
    /// Forecast date (`YYYYMMDD`)
    pub date: String,
    /// Forecast time (`HH:MM`)
    pub time: String,
    pub temperature: String,
    pub sky: String,
    pub precipitation_type: String,
    pub precipitation_probability: String,
}

/// Index of a response keyed by `(category, date, time)`
///
/// Built once per response so lookups are constant time. When the same key
/// occurs more than once the first occurrence wins.
#[derive(Debug, Clone)]
pub struct ForecastIndex<'a> {
    items: &'a [ForecastItem],
    by_slot: HashMap<(Category, &'a str, &'a str), &'a str>,
    by_day: HashMap<(Category, &'a str), &'a str>,
}

impl<'a> ForecastIndex<'a> {
    /// Index a response
    #[must_use]
    pub fn new(items: &'a [ForecastItem]) -> Self {
        let mut by_slot = HashMap::with_capacity(items.len());
        let mut by_day = HashMap::new();

        for item in items {
            let value = item.fcst_value.as_str();
            by_slot
                .entry((item.category, item.fcst_date.as_str(), item.fcst_time.as_str()))
                .or_insert(value);
            by_day
                .entry((item.category, item.fcst_date.as_str()))
                .or_insert(value);
        }

        Self {
            items,
            by_slot,
            by_day,
        }
    }

    /// The indexed items in response order
    #[must_use]
    pub const fn items(&self) -> &'a [ForecastItem] {
        self.items
    }

    /// Value of `category` at a slot, or `""`
    #[must_use]
    pub fn value(&self, category: Category, date: &str, time: &str) -> &'a str {
        self.by_slot
            .get(&(category, date, time))
            .copied()
            .unwrap_or_default()
    }

    /// First value of `category` on a date, or `""`
    #[must_use]
    pub fn first_of_day(&self, category: Category, date: &str) -> &'a str {
        self.by_day
            .get(&(category, date))
            .copied()
            .unwrap_or_default()
    }

    /// Conditions at the first slot of the response
    ///
    /// Returns `None` for an empty response.
    #[must_use]
    pub fn current_conditions(&self) -> Option<CurrentConditions> {
        let first = self.items.first()?;
        let (date, time) = (first.fcst_date.as_str(), first.fcst_time.as_str());
        let at = |category: Category| self.value(category, date, time).to_string();

        Some(CurrentConditions {
            date: date.to_string(),
            time: time.to_string(),
            temperature: at(Category::Temperature),
            sky: at(Category::Sky),
            precipitation_type: at(Category::PrecipitationType),
            precipitation_probability: at(Category::PrecipitationProbability),
            hourly_precipitation: at(Category::HourlyPrecipitation),
            humidity: at(Category::Humidity),
            wind_speed: at(Category::WindSpeed),
        })
    }

    /// Daily minimum and maximum for a date (`YYYYMMDD`)
    #[must_use]
    pub fn daily_min_max(&self, date: &str) -> MinMax {
        MinMax {
            min: self.first_of_day(Category::DailyMinimum, date).to_string(),
            max: self.first_of_day(Category::DailyMaximum, date).to_string(),
        }
    }

    /// Upcoming hourly slots starting at `current_hour` on `date`
    ///
    /// Distinct `(date, time)` slots are ordered by `"{date}-{time}"` and
    /// those before `"{date}-{current_hour:02}00"` are dropped. Slots are
    /// compared against `date` only: once the wall clock has moved past
    /// midnight relative to `date`, the previous day's slots are kept.
    #[must_use]
    pub fn hourly_series(&self, date: &str, current_hour: u32, hours: usize) -> Vec<HourlySlot> {
        let slots: BTreeSet<String> = self
            .items
            .iter()
            .map(|item| format!("{}-{}", item.fcst_date, item.fcst_time))
            .collect();
        let cutoff = format!("{date}-{current_hour:02}00");

        slots
            .range(cutoff..)
            .take(hours)
            .filter_map(|key| {
                let (slot_date, slot_time) = key.split_once('-')?;
                let at = |category: Category| self.value(category, slot_date, slot_time).to_string();
                Some(HourlySlot {
                    date: slot_date.to_string(),
                    time: display_time(slot_time),
                    temperature: at(Category::Temperature),
                    sky: at(Category::Sky),
                    precipitation_type: at(Category::PrecipitationType),
                    precipitation_probability: at(Category::PrecipitationProbability),
                })
            })
            .collect()
    }
}

/// `HHMM` as `HH:MM`
fn display_time(time: &str) -> String {
    match (time.get(0..2), time.get(2..4)) {
        (Some(hh), Some(mm)) => format!("{hh}:{mm}"),
        _ => time.to_string(),
    }
}
