//! Sky and precipitation code tables

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sky state (`SKY` category)
///
/// Higher codes are cloudier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkyState {
    /// Code 1
    Clear,
    /// Code 3
    MostlyCloudy,
    /// Code 4
    Overcast,
}

impl SkyState {
    /// Map a numeric sky code
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Clear),
            3 => Some(Self::MostlyCloudy),
            4 => Some(Self::Overcast),
            _ => None,
        }
    }

    /// Parse a raw `fcstValue`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().and_then(Self::from_code)
    }

    /// Korean description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Clear => "맑음",
            Self::MostlyCloudy => "구름많음",
            Self::Overcast => "흐림",
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::MostlyCloudy => "⛅",
            Self::Overcast => "☁️",
        }
    }
}

impl fmt::Display for SkyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Precipitation type (`PTY` category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PrecipitationType {
    /// Code 0
    #[default]
    None,
    /// Code 1
    Rain,
    /// Code 2
    RainAndSnow,
    /// Code 3
    Snow,
    /// Code 5
    Drizzle,
    /// Code 6
    DrizzleAndSnowFlurries,
    /// Code 7
    SnowFlurries,
}

impl PrecipitationType {
    /// Map a numeric precipitation code
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Rain),
            2 => Some(Self::RainAndSnow),
            3 => Some(Self::Snow),
            5 => Some(Self::Drizzle),
            6 => Some(Self::DrizzleAndSnowFlurries),
            7 => Some(Self::SnowFlurries),
            _ => None,
        }
    }

    /// Parse a raw `fcstValue`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().and_then(Self::from_code)
    }

    /// Korean description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "없음",
            Self::Rain => "비",
            Self::RainAndSnow => "비/눈",
            Self::Snow => "눈",
            Self::Drizzle => "빗방울",
            Self::DrizzleAndSnowFlurries => "빗방울눈날림",
            Self::SnowFlurries => "눈날림",
        }
    }

    /// Whether anything falls
    #[must_use]
    pub const fn is_precipitating(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Rain | Self::Drizzle => "🌧️",
            Self::RainAndSnow | Self::DrizzleAndSnowFlurries => "🌨️",
            Self::Snow | Self::SnowFlurries => "❄️",
        }
    }
}

impl fmt::Display for PrecipitationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Weather text for a half-day from its worst sky and precipitation codes
///
/// Precipitation wins over sky state; unknown codes read as clear.
#[must_use]
pub fn weather_text(precipitation: i32, sky: i32) -> &'static str {
    match PrecipitationType::from_code(precipitation) {
        Some(pty) if pty.is_precipitating() => pty.description(),
        _ => SkyState::from_code(sky).unwrap_or(SkyState::Clear).description(),
    }
}
