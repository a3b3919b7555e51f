//! Mid-term (days 3–10) land and temperature forecast records

use serde::{Deserialize, Serialize};

/// Weather text and rain probability for the two halves of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfDayOutlook<'a> {
    /// Morning weather text (e.g. `구름많음`)
    pub weather_am: Option<&'a str>,
    /// Afternoon weather text
    pub weather_pm: Option<&'a str>,
    /// Morning rain probability (%)
    pub rain_am: Option<u8>,
    /// Afternoon rain probability (%)
    pub rain_pm: Option<u8>,
}

/// One record of `getMidLandFcst`
///
/// Days 3–7 are split into AM/PM, days 8–10 carry a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MidTermLandForecast {
    pub reg_id: String,
    pub rn_st3_am: Option<u8>,
    pub rn_st3_pm: Option<u8>,
    pub rn_st4_am: Option<u8>,
    pub rn_st4_pm: Option<u8>,
    pub rn_st5_am: Option<u8>,
    pub rn_st5_pm: Option<u8>,
    pub rn_st6_am: Option<u8>,
    pub rn_st6_pm: Option<u8>,
    pub rn_st7_am: Option<u8>,
    pub rn_st7_pm: Option<u8>,
    pub rn_st8: Option<u8>,
    pub rn_st9: Option<u8>,
    pub rn_st10: Option<u8>,
    pub wf3_am: Option<String>,
    pub wf3_pm: Option<String>,
    pub wf4_am: Option<String>,
    pub wf4_pm: Option<String>,
    pub wf5_am: Option<String>,
    pub wf5_pm: Option<String>,
    pub wf6_am: Option<String>,
    pub wf6_pm: Option<String>,
    pub wf7_am: Option<String>,
    pub wf7_pm: Option<String>,
    pub wf8: Option<String>,
    pub wf9: Option<String>,
    pub wf10: Option<String>,
}

fn text(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl MidTermLandForecast {
    /// Outlook for `day` days after the release date
    ///
    /// Returns an empty outlook for days outside 3–10.
    #[must_use]
    pub fn outlook(&self, day: u32) -> HalfDayOutlook<'_> {
        let (wf_am, wf_pm, rn_am, rn_pm) = match day {
            3 => (&self.wf3_am, &self.wf3_pm, self.rn_st3_am, self.rn_st3_pm),
            4 => (&self.wf4_am, &self.wf4_pm, self.rn_st4_am, self.rn_st4_pm),
            5 => (&self.wf5_am, &self.wf5_pm, self.rn_st5_am, self.rn_st5_pm),
            6 => (&self.wf6_am, &self.wf6_pm, self.rn_st6_am, self.rn_st6_pm),
            7 => (&self.wf7_am, &self.wf7_pm, self.rn_st7_am, self.rn_st7_pm),
            8 => (&self.wf8, &self.wf8, self.rn_st8, self.rn_st8),
            9 => (&self.wf9, &self.wf9, self.rn_st9, self.rn_st9),
            10 => (&self.wf10, &self.wf10, self.rn_st10, self.rn_st10),
            _ => return HalfDayOutlook::default(),
        };

        HalfDayOutlook {
            weather_am: text(wf_am.as_ref()),
            weather_pm: text(wf_pm.as_ref()),
            rain_am: rn_am,
            rain_pm: rn_pm,
        }
    }
}

/// One record of `getMidTa`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MidTermTemperatureForecast {
    pub reg_id: String,
    pub ta_min3: Option<f64>,
    pub ta_min4: Option<f64>,
    pub ta_min5: Option<f64>,
    pub ta_min6: Option<f64>,
    pub ta_min7: Option<f64>,
    pub ta_min8: Option<f64>,
    pub ta_min9: Option<f64>,
    pub ta_min10: Option<f64>,
    pub ta_max3: Option<f64>,
    pub ta_max4: Option<f64>,
    pub ta_max5: Option<f64>,
    pub ta_max6: Option<f64>,
    pub ta_max7: Option<f64>,
    pub ta_max8: Option<f64>,
    pub ta_max9: Option<f64>,
    pub ta_max10: Option<f64>,
}

impl MidTermTemperatureForecast {
    /// `(min, max)` for `day` days after the release date
    #[must_use]
    pub const fn range(&self, day: u32) -> (Option<f64>, Option<f64>) {
        match day {
            3 => (self.ta_min3, self.ta_max3),
            4 => (self.ta_min4, self.ta_max4),
            5 => (self.ta_min5, self.ta_max5),
            6 => (self.ta_min6, self.ta_max6),
            7 => (self.ta_min7, self.ta_max7),
            8 => (self.ta_min8, self.ta_max8),
            9 => (self.ta_min9, self.ta_max9),
            10 => (self.ta_min10, self.ta_max10),
            _ => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_land_record() {
        let json = r#"{
            "regId": "11B00000",
            "rnSt4Am": 20, "rnSt4Pm": 60,
            "wf4Am": "맑음", "wf4Pm": "흐리고 비",
            "rnSt8": 30, "wf8": "구름많음"
        }"#;
        let land: MidTermLandForecast = serde_json::from_str(json).expect("deserialize");
        assert_eq!(land.reg_id, "11B00000");

        let day4 = land.outlook(4);
        assert_eq!(day4.weather_am, Some("맑음"));
        assert_eq!(day4.weather_pm, Some("흐리고 비"));
        assert_eq!(day4.rain_pm, Some(60));
    }

    #[test]
    fn single_value_days_fill_both_halves() {
        let land = MidTermLandForecast {
            wf9: Some("흐림".to_string()),
            rn_st9: Some(40),
            ..Default::default()
        };
        let day9 = land.outlook(9);
        assert_eq!(day9.weather_am, Some("흐림"));
        assert_eq!(day9.weather_pm, Some("흐림"));
        assert_eq!((day9.rain_am, day9.rain_pm), (Some(40), Some(40)));
    }

    #[test]
    fn empty_text_counts_as_missing() {
        let land = MidTermLandForecast {
            wf5_am: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(land.outlook(5).weather_am, None);
    }

    #[test]
    fn out_of_range_day_is_empty() {
        let land = MidTermLandForecast::default();
        assert_eq!(land.outlook(11), HalfDayOutlook::default());
        assert_eq!(MidTermTemperatureForecast::default().range(2), (None, None));
    }

    #[test]
    fn temperature_range_reads_matching_fields() {
        let json = r#"{"regId":"11B10101","taMin6":3,"taMax6":14.5}"#;
        let temp: MidTermTemperatureForecast = serde_json::from_str(json).expect("deserialize");
        assert_eq!(temp.range(6), (Some(3.0), Some(14.5)));
        assert_eq!(temp.range(7), (None, None));
    }
}
