//! Forecast release schedule
//!
//! Short-term forecasts are published eight times a day and become
//! queryable ten minutes after the hour. Mid-term forecasts are always read
//! from the 06:00 release, which reliably carries days 3 and 4.

use chrono::{Days, NaiveDateTime, Timelike};

use crate::value_objects::BaseDateTime;

/// Short-term release hours
pub const SHORT_TERM_RELEASE_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

/// Minutes after the release hour before the data is available
pub const RELEASE_DELAY_MINUTES: u32 = 10;

/// Hour of the mid-term release that is always queried
pub const MID_TERM_RELEASE_HOUR: u32 = 6;

/// Latest short-term release available at `now`
///
/// Before 02:10 this is the previous day's 23:10 release.
#[must_use]
pub fn short_term_base(now: NaiveDateTime) -> BaseDateTime {
    let (hour, minute) = (now.hour(), now.minute());

    let release = SHORT_TERM_RELEASE_HOURS
        .iter()
        .rev()
        .copied()
        .find(|&h| hour > h || (hour == h && minute >= RELEASE_DELAY_MINUTES));

    match release {
        Some(h) => BaseDateTime::new(
            now.format("%Y%m%d").to_string(),
            format!("{h:02}{RELEASE_DELAY_MINUTES:02}"),
        ),
        None => {
            let yesterday = previous_day(now);
            BaseDateTime::new(
                yesterday.format("%Y%m%d").to_string(),
                format!("23{RELEASE_DELAY_MINUTES:02}"),
            )
        },
    }
}

/// Mid-term release timestamp (`tmFc`, `YYYYMMDDHH00`) to query at `now`
///
/// Today's 06:00 release, or yesterday's when `now` is before 06:00.
#[must_use]
pub fn mid_term_release(now: NaiveDateTime) -> String {
    let date = if now.hour() < MID_TERM_RELEASE_HOUR {
        previous_day(now)
    } else {
        now
    };
    format!("{}{MID_TERM_RELEASE_HOUR:02}00", date.format("%Y%m%d"))
}

fn previous_day(now: NaiveDateTime) -> NaiveDateTime {
    now.checked_sub_days(Days::new(1)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    #[test]
    fn picks_release_once_available() {
        let base = short_term_base(at(2026, 10, 18, 8, 15));
        assert_eq!(base, BaseDateTime::new("20261018", "0810"));
    }

    #[test]
    fn falls_back_before_release_delay() {
        let base = short_term_base(at(2026, 10, 18, 8, 5));
        assert_eq!(base, BaseDateTime::new("20261018", "0510"));
    }

    #[test]
    fn exactly_at_release_delay_is_available() {
        let base = short_term_base(at(2026, 10, 18, 14, 10));
        assert_eq!(base.base_time, "1410");
    }

    #[test]
    fn early_morning_uses_previous_day_2310() {
        let base = short_term_base(at(2026, 10, 18, 1, 30));
        assert_eq!(base, BaseDateTime::new("20261017", "2310"));
    }

    #[test]
    fn previous_day_crosses_year_boundary() {
        let base = short_term_base(at(2026, 1, 1, 2, 9));
        assert_eq!(base, BaseDateTime::new("20251231", "2310"));
    }

    #[test]
    fn late_evening_uses_same_day_2310() {
        let base = short_term_base(at(2026, 10, 18, 23, 59));
        assert_eq!(base, BaseDateTime::new("20261018", "2310"));
    }

    #[test]
    fn mid_term_before_six_uses_previous_day() {
        assert_eq!(mid_term_release(at(2026, 10, 18, 5, 0)), "202610170600");
    }

    #[test]
    fn mid_term_after_six_uses_same_day() {
        assert_eq!(mid_term_release(at(2026, 10, 18, 6, 0)), "202610180600");
        assert_eq!(mid_term_release(at(2026, 10, 18, 23, 59)), "202610180600");
    }

    #[test]
    fn mid_term_crosses_month_boundary() {
        assert_eq!(mid_term_release(at(2026, 3, 1, 0, 30)), "202602280600");
    }

    proptest! {
        #[test]
        fn base_time_is_a_release_slot_not_in_the_future(hour in 0u32..24, minute in 0u32..60) {
            let now = at(2026, 10, 18, hour, minute);
            let base = short_term_base(now);

            prop_assert!(base.base_time.ends_with("10"));
            let release_hour: u32 = base.base_time[..2].parse().unwrap();
            prop_assert!(SHORT_TERM_RELEASE_HOURS.contains(&release_hour));

            let release = NaiveDateTime::parse_from_str(
                &format!("{}{}", base.base_date, base.base_time),
                "%Y%m%d%H%M",
            )
            .unwrap();
            prop_assert!(release <= now);
            prop_assert!(now - release < chrono::Duration::hours(3));
        }

        #[test]
        fn mid_term_release_is_always_six_oclock(hour in 0u32..24, minute in 0u32..60) {
            let release = mid_term_release(at(2026, 10, 18, hour, minute));
            prop_assert!(release.ends_with("0600"));
            prop_assert_eq!(release.len(), 12);
        }
    }
}
