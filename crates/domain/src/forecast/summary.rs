//! Collapsing a day's morning and afternoon into one value

use super::mid_term::PENDING_FORECAST;

/// Shown when neither half-day has weather text
pub const NO_INFORMATION: &str = "정보 없음";

/// Broad weather class of a weather text, used to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    Rain,
    Snow,
    Clear,
    Cloudy,
}

impl WeatherKind {
    /// Classify a Korean weather text
    ///
    /// Rain is checked before snow, so `비/눈` counts as rain.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text == PENDING_FORECAST {
            Self::Cloudy
        } else if text.contains('비') {
            Self::Rain
        } else if text.contains('눈') {
            Self::Snow
        } else if text.contains("맑음") {
            Self::Clear
        } else {
            Self::Cloudy
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Clear => "☀️",
            Self::Cloudy => "☁️",
        }
    }
}

// The placeholder text contains 비 (준비) but is not a forecast
fn is_precipitation(text: &str) -> bool {
    text != PENDING_FORECAST && (text.contains('비') || text.contains('눈'))
}

/// The weather text that represents the whole day
///
/// Rain or snow in either half wins, the afternoon is preferred otherwise.
/// An empty half is ignored; both empty gives [`NO_INFORMATION`].
#[must_use]
pub fn representative_weather<'a>(am: &'a str, pm: &'a str) -> &'a str {
    match (am.is_empty(), pm.is_empty()) {
        (true, true) => NO_INFORMATION,
        (false, true) => am,
        (true, false) => pm,
        (false, false) if !is_precipitation(pm) && is_precipitation(am) => am,
        (false, false) => pm,
    }
}

/// The higher of the two half-day rain probabilities
#[must_use]
pub fn max_rain_probability(am: u8, pm: u8) -> u8 {
    am.max(pm)
}
