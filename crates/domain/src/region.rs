//! Mid-term forecast region lookup
//!
//! South Korea is covered by nine rectangular zones. The boxes overlap; they
//! are tested in table order and the first match wins. Coordinates outside
//! every box fall back to Seoul.

use std::ops::RangeInclusive;

use crate::value_objects::{RegionCode, RegionCodes};

/// A mid-term forecast zone
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Zone name
    pub name: &'static str,
    /// Latitude bounds (inclusive)
    pub latitude: RangeInclusive<f64>,
    /// Longitude bounds (inclusive)
    pub longitude: RangeInclusive<f64>,
    /// Land forecast code (`getMidLandFcst`)
    pub land_code: &'static str,
    /// Temperature forecast code (`getMidTa`), the zone's main station
    pub temperature_code: &'static str,
}

impl Zone {
    /// Whether the coordinate lies inside the zone's box
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.latitude.contains(&latitude) && self.longitude.contains(&longitude)
    }

    /// Both region codes of this zone
    #[must_use]
    pub fn codes(&self) -> RegionCodes {
        RegionCodes {
            land: RegionCode::new(self.land_code),
            temperature: RegionCode::new(self.temperature_code),
        }
    }
}

const fn zone(
    name: &'static str,
    latitude: RangeInclusive<f64>,
    longitude: RangeInclusive<f64>,
    land_code: &'static str,
    temperature_code: &'static str,
) -> Zone {
    Zone {
        name,
        latitude,
        longitude,
        land_code,
        temperature_code,
    }
}

/// Zones in lookup order
pub static ZONES: [Zone; 9] = [
    zone("충북", 36.0..=37.5, 127.5..=128.5, "11C10000", "11C10301"),
    zone("대전/세종/충남", 36.0..=37.0, 126.5..=127.5, "11C20000", "11C20401"),
    zone("서울/인천/경기", 37.0..=38.0, 126.5..=127.5, "11B00000", "11B10101"),
    zone("광주/전남", 34.5..=36.0, 126.0..=127.5, "11F20000", "11F20501"),
    zone("전북", 35.5..=36.5, 126.5..=127.5, "11F10000", "11F10201"),
    zone("부산/울산/경남", 34.5..=36.0, 128.0..=129.5, "11H20000", "11H20201"),
    zone("대구/경북", 35.5..=37.0, 128.0..=129.5, "11H10000", "11H10701"),
    zone("강원", 37.0..=39.0, 127.5..=129.5, "11D10000", "11D10301"),
    zone("제주", 33.0..=34.0, 126.0..=127.0, "11G00000", "11G00201"),
];

/// Zone used when no box matches (Seoul/Incheon/Gyeonggi)
#[must_use]
pub fn default_zone() -> &'static Zone {
    &ZONES[2]
}

/// First zone whose box contains the coordinate
#[must_use]
pub fn zone_for(latitude: f64, longitude: f64) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.contains(latitude, longitude))
}

fn zone_or_default(latitude: f64, longitude: f64) -> &'static Zone {
    zone_for(latitude, longitude).unwrap_or_else(default_zone)
}

/// Land forecast region code for a coordinate
#[must_use]
pub fn land_forecast_region_code(latitude: f64, longitude: f64) -> RegionCode {
    RegionCode::new(zone_or_default(latitude, longitude).land_code)
}

/// Temperature forecast region code for a coordinate
#[must_use]
pub fn temperature_forecast_region_code(latitude: f64, longitude: f64) -> RegionCode {
    RegionCode::new(zone_or_default(latitude, longitude).temperature_code)
}

/// Both region codes for a coordinate
#[must_use]
pub fn resolve_region(latitude: f64, longitude: f64) -> RegionCodes {
    zone_or_default(latitude, longitude).codes()
}
