//! Forecast release identifier (`base_date` / `base_time`)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Identifies which short-term forecast release is queried
///
/// This is the release timestamp, not the time being forecast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseDateTime {
    /// Release date as `YYYYMMDD`
    pub base_date: String,
    /// Release time as `HHMM`
    pub base_time: String,
}

impl BaseDateTime {
    /// Create a release identifier from its wire representation
    pub fn new(base_date: impl Into<String>, base_time: impl Into<String>) -> Self {
        Self {
            base_date: base_date.into(),
            base_time: base_time.into(),
        }
    }

    /// Parse the release date
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if `base_date` is not `YYYYMMDD`
    pub fn date(&self) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(&self.base_date, "%Y%m%d")
            .map_err(|e| DomainError::InvalidDateTime(format!("{}: {e}", self.base_date)))
    }

    /// Human-readable "last updated" label, e.g. `2026-10-18 08:10`
    ///
    /// Falls back to the raw values when they are not fixed-width.
    #[must_use]
    pub fn display(&self) -> String {
        let (date, time) = (self.base_date.as_str(), self.base_time.as_str());
        match (
            date.get(0..4),
            date.get(4..6),
            date.get(6..8),
            time.get(0..2),
            time.get(2..4),
        ) {
            (Some(y), Some(m), Some(d), Some(hh), Some(mm)) => format!("{y}-{m}-{d} {hh}:{mm}"),
            _ => format!("{date} {time}"),
        }
    }
}

impl fmt::Display for BaseDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.base_date, self.base_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_last_updated_label() {
        let base = BaseDateTime::new("20261018", "0810");
        assert_eq!(base.display(), "2026-10-18 08:10");
    }

    #[test]
    fn display_tolerates_short_values() {
        let base = BaseDateTime::new("2026", "8");
        assert_eq!(base.display(), "2026 8");
    }

    #[test]
    fn date_parses_release_date() {
        let base = BaseDateTime::new("20261018", "0810");
        assert_eq!(base.date().unwrap(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }

    #[test]
    fn date_rejects_garbage() {
        assert!(BaseDateTime::new("2026-10", "0810").date().is_err());
    }

    #[test]
    fn wire_format_display() {
        assert_eq!(BaseDateTime::new("20261018", "2310").to_string(), "20261018 2310");
    }
}
