//! Plain-text rendering of a weather report

use std::fmt::Write as _;

use application::WeatherReport;
use domain::forecast::{
    CurrentConditions, HourlySlot, PrecipitationType, SkyState, WeatherKind,
    max_rain_probability, representative_weather,
};
use domain::{DailyForecast, GpsCoordinate, GridCoordinate};

/// Emoji and Korean text for raw `PTY` and `SKY` values
///
/// Precipitation wins over sky state; unknown sky codes read as clear.
fn condition(precipitation_type: &str, sky: &str) -> String {
    match PrecipitationType::parse(precipitation_type).filter(|p| p.is_precipitating()) {
        Some(precipitation) => format!("{} {precipitation}", precipitation.emoji()),
        None => {
            let sky = SkyState::parse(sky).unwrap_or(SkyState::Clear);
            format!("{} {sky}", sky.emoji())
        },
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

pub fn grid(grid: GridCoordinate) -> String {
    format!("nx={} ny={}", grid.nx, grid.ny)
}

pub fn gps(coordinate: GpsCoordinate) -> String {
    format!(
        "lat={:.6} lon={:.6}",
        coordinate.latitude(),
        coordinate.longitude()
    )
}

fn current(out: &mut String, current: &CurrentConditions) {
    let _ = writeln!(
        out,
        "현재 {}°C {} · 강수확률 {}% · 습도 {}% · 풍속 {}m/s",
        or_dash(&current.temperature),
        condition(&current.precipitation_type, &current.sky),
        or_dash(&current.precipitation_probability),
        or_dash(&current.humidity),
        or_dash(&current.wind_speed),
    );
}

fn hourly(out: &mut String, slots: &[HourlySlot]) {
    if slots.is_empty() {
        return;
    }
    out.push_str("\n시간별\n");
    for slot in slots {
        let _ = writeln!(
            out,
            "  {} {}  {:>3}°C  {}  {}%",
            slot.date,
            slot.time,
            or_dash(&slot.temperature),
            condition(&slot.precipitation_type, &slot.sky),
            or_dash(&slot.precipitation_probability),
        );
    }
}

fn day(out: &mut String, day: &DailyForecast) {
    let weather = representative_weather(&day.weather_am, &day.weather_pm);
    let _ = writeln!(
        out,
        "  {}  {} {}  {:.0}°C / {:.0}°C  {}%",
        day.label,
        WeatherKind::classify(weather).emoji(),
        weather,
        day.temperature_min,
        day.temperature_max,
        max_rain_probability(day.rain_probability_am, day.rain_probability_pm),
    );
}

/// Human-readable report
pub fn report(report: &WeatherReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "📍 {:.4}, {:.4} (격자 {}, {})",
        report.location.latitude(),
        report.location.longitude(),
        report.grid.nx,
        report.grid.ny,
    );
    let _ = writeln!(
        out,
        "🕐 업데이트 {} · 중기 발표 {}",
        report.last_updated, report.mid_term_release
    );

    match &report.current {
        Some(conditions) => current(&mut out, conditions),
        None => out.push_str("현재 정보 없음\n"),
    }
    let _ = writeln!(
        out,
        "오늘 최저 {}°C / 최고 {}°C",
        or_dash(&report.min_max.min),
        or_dash(&report.min_max.max)
    );

    hourly(&mut out, &report.hourly);

    if !report.weekly.is_empty() {
        out.push_str("\n주간\n");
        for forecast in &report.weekly {
            day(&mut out, forecast);
        }
    }
    out
}
