//! Short-term forecast items as reported by the village forecast API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Forecast category code
///
/// Unknown codes are kept as [`Category::Unknown`] so new upstream
/// categories never break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Precipitation probability (%)
    #[serde(rename = "POP")]
    PrecipitationProbability,
    /// Precipitation type code
    #[serde(rename = "PTY")]
    PrecipitationType,
    /// Precipitation amount in the past hour
    #[serde(rename = "PCP")]
    HourlyPrecipitation,
    /// Relative humidity (%)
    #[serde(rename = "REH")]
    Humidity,
    /// New snow in the past hour
    #[serde(rename = "SNO")]
    HourlySnowfall,
    /// Sky state code
    #[serde(rename = "SKY")]
    Sky,
    /// Hourly temperature (°C)
    #[serde(rename = "TMP")]
    Temperature,
    /// Daily minimum temperature (°C)
    #[serde(rename = "TMN")]
    DailyMinimum,
    /// Daily maximum temperature (°C)
    #[serde(rename = "TMX")]
    DailyMaximum,
    /// East-west wind component (m/s)
    #[serde(rename = "UUU")]
    WindEastWest,
    /// North-south wind component (m/s)
    #[serde(rename = "VVV")]
    WindNorthSouth,
    /// Wave height (m)
    #[serde(rename = "WAV")]
    WaveHeight,
    /// Wind direction (deg)
    #[serde(rename = "VEC")]
    WindDirection,
    /// Wind speed (m/s)
    #[serde(rename = "WSD")]
    WindSpeed,
    /// Temperature of the hour, ultra short-term only (°C)
    #[serde(rename = "T1H")]
    HourlyTemperature,
    /// Rainfall in the past hour, ultra short-term only (mm)
    #[serde(rename = "RN1")]
    HourlyRainfall,
    /// Lightning (kA), ultra short-term only
    #[serde(rename = "LGT")]
    Lightning,
    /// Any code not listed above
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Category {
    /// Map an upstream category code
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "POP" => Self::PrecipitationProbability,
            "PTY" => Self::PrecipitationType,
            "PCP" => Self::HourlyPrecipitation,
            "REH" => Self::Humidity,
            "SNO" => Self::HourlySnowfall,
            "SKY" => Self::Sky,
            "TMP" => Self::Temperature,
            "TMN" => Self::DailyMinimum,
            "TMX" => Self::DailyMaximum,
            "UUU" => Self::WindEastWest,
            "VVV" => Self::WindNorthSouth,
            "WAV" => Self::WaveHeight,
            "VEC" => Self::WindDirection,
            "WSD" => Self::WindSpeed,
            "T1H" => Self::HourlyTemperature,
            "RN1" => Self::HourlyRainfall,
            "LGT" => Self::Lightning,
            _ => Self::Unknown,
        }
    }

    /// The upstream category code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PrecipitationProbability => "POP",
            Self::PrecipitationType => "PTY",
            Self::HourlyPrecipitation => "PCP",
            Self::Humidity => "REH",
            Self::HourlySnowfall => "SNO",
            Self::Sky => "SKY",
            Self::Temperature => "TMP",
            Self::DailyMinimum => "TMN",
            Self::DailyMaximum => "TMX",
            Self::WindEastWest => "UUU",
            Self::WindNorthSouth => "VVV",
            Self::WaveHeight => "WAV",
            Self::WindDirection => "VEC",
            Self::WindSpeed => "WSD",
            Self::HourlyTemperature => "T1H",
            Self::HourlyRainfall => "RN1",
            Self::Lightning => "LGT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// One `(category, date, time, value)` tuple of a short-term response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastItem {
    /// Release date (`YYYYMMDD`)
    #[serde(default)]
    pub base_date: String,
    /// Release time (`HHMM`)
    #[serde(default)]
    pub base_time: String,
    /// What the value measures
    pub category: Category,
    /// Forecast date (`YYYYMMDD`)
    pub fcst_date: String,
    /// Forecast time (`HHMM`)
    pub fcst_time: String,
    /// Raw value, units depend on the category
    pub fcst_value: String,
    /// Grid column
    #[serde(default)]
    pub nx: i32,
    /// Grid row
    #[serde(default)]
    pub ny: i32,
}

impl ForecastItem {
    /// Build an item for a forecast slot; release and grid fields are left empty
    pub fn new(
        category: Category,
        fcst_date: impl Into<String>,
        fcst_time: impl Into<String>,
        fcst_value: impl Into<String>,
    ) -> Self {
        Self {
            base_date: String::new(),
            base_time: String::new(),
            category,
            fcst_date: fcst_date.into(),
            fcst_time: fcst_time.into(),
            fcst_value: fcst_value.into(),
            nx: 0,
            ny: 0,
        }
    }

    /// Hour of the forecast slot, if `fcst_time` starts with two digits
    #[must_use]
    pub fn hour(&self) -> Option<u32> {
        self.fcst_time.get(0..2)?.parse().ok()
    }
}
