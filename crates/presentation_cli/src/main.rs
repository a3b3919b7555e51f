//! Hanul CLI
//!
//! Grid conversion, release-time lookup, region lookup and full forecasts
//! from the command line.

#![allow(clippy::print_stdout)]

mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use application::WeatherService;
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Asia::Seoul;
use clap::{Parser, Subcommand};
use domain::{
    GpsCoordinate, GridCoordinate,
    forecast::DEFAULT_HOURLY_SLOTS,
    projection::{gps_to_grid, grid_to_gps},
    region::{resolve_region, zone_for},
    schedule::{mid_term_release, short_term_base},
    short_address,
};
use infrastructure::{AppConfig, KmaForecastAdapter, init_tracing};
use tracing::debug;

/// Hanul CLI
#[derive(Parser)]
#[command(name = "hanul")]
#[command(author, version, about = "Korean weather forecasts from the KMA open API", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml when present)
    #[arg(short, long, global = true, env = "HANUL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert GPS coordinates to a KMA grid cell
    Grid {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Convert a KMA grid cell to the GPS coordinates of its center
    Gps { nx: i32, ny: i32 },

    /// Show the latest short-term base time and mid-term release
    BaseTime {
        /// Korea Standard Time instant, e.g. 2026-10-18T08:15 (default: now)
        #[arg(long, value_parser = parse_instant)]
        at: Option<NaiveDateTime>,
    },

    /// Show the mid-term region codes of a location
    Region {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Fetch the merged forecast for a location
    ///
    /// Without coordinates or --favorite the configured default location is
    /// used, or Seoul City Hall.
    Forecast {
        #[arg(allow_negative_numbers = true, requires = "longitude")]
        latitude: Option<f64>,
        #[arg(allow_negative_numbers = true)]
        longitude: Option<f64>,

        /// Name or address of a configured favorite
        #[arg(short, long, conflicts_with = "latitude")]
        favorite: Option<String>,

        /// Korea Standard Time instant, e.g. 2026-10-18T08:15 (default: now)
        #[arg(long, value_parser = parse_instant)]
        at: Option<NaiveDateTime>,

        /// Number of hourly slots to include
        #[arg(long, default_value_t = DEFAULT_HOURLY_SLOTS)]
        hours: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List configured favorites
    Favorites,

    /// Shorten a full address to its district and neighbourhood
    ShortAddress { address: String },

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn parse_instant(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM: {e}"))
}

/// Current wall-clock time in Korea
fn seoul_now() -> NaiveDateTime {
    Utc::now().with_timezone(&Seoul).naive_local()
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => AppConfig::load().context("Failed to load configuration"),
    }
}

/// Pick the forecast location from arguments, favorites or configuration
fn resolve_location(
    config: &AppConfig,
    coordinates: Option<(f64, f64)>,
    favorite: Option<&str>,
) -> anyhow::Result<GpsCoordinate> {
    if let Some((latitude, longitude)) = coordinates {
        return Ok(GpsCoordinate::new(latitude, longitude)?);
    }

    if let Some(wanted) = favorite {
        let favorites = config.favorite_list()?;
        let Some(found) = favorites
            .iter()
            .find(|f| f.name == wanted)
            .or_else(|| favorites.find_by_address(wanted))
        else {
            bail!("No favorite named '{wanted}'");
        };
        return Ok(found.location);
    }

    Ok(config.default_location()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut telemetry = config.telemetry.clone();
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        filter.clone_into(&mut telemetry.log_filter);
    }
    init_tracing(&telemetry)?;

    match cli.command {
        Commands::Grid {
            latitude,
            longitude,
        } => {
            let coordinate = GpsCoordinate::new(latitude, longitude)?;
            println!("{}", render::grid(gps_to_grid(coordinate)));
        },

        Commands::Gps { nx, ny } => {
            println!("{}", render::gps(grid_to_gps(GridCoordinate::new(nx, ny))));
        },

        Commands::BaseTime { at } => {
            let now = at.unwrap_or_else(seoul_now);
            let base = short_term_base(now);
            println!("short-term base: {} {}", base.base_date, base.base_time);
            println!("mid-term release: {}", mid_term_release(now));
            println!("last updated: {}", base.display());
        },

        Commands::Region {
            latitude,
            longitude,
        } => {
            let zone = zone_for(latitude, longitude);
            let codes = resolve_region(latitude, longitude);
            match zone {
                Some(zone) => println!("zone: {}", zone.name),
                None => println!("zone: none (Seoul fallback)"),
            }
            println!("land: {}", codes.land);
            println!("temperature: {}", codes.temperature);
        },

        Commands::Forecast {
            latitude,
            longitude,
            favorite,
            at,
            hours,
            json,
        } => {
            let location =
                resolve_location(&config, latitude.zip(longitude), favorite.as_deref())?;
            let now = at.unwrap_or_else(seoul_now);
            debug!(%now, "Resolved forecast instant");

            let adapter = KmaForecastAdapter::from_config(&config)?;
            let service = WeatherService::new(Arc::new(adapter)).with_hourly_slots(hours);
            let report = service.report(location, now).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::report(&report));
            }
        },

        Commands::Favorites => {
            let favorites = config.favorite_list()?;
            if favorites.is_empty() {
                println!("No favorites configured");
            }
            for favorite in favorites.iter() {
                let grid = gps_to_grid(favorite.location);
                println!(
                    "{}\t{}\t{}",
                    favorite.name,
                    short_address(&favorite.address),
                    render::grid(grid)
                );
            }
        },

        Commands::ShortAddress { address } => {
            println!("{}", short_address(&address));
        },

        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure::{FavoriteEntry, LocationConfig};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    fn config_with_favorite() -> AppConfig {
        AppConfig {
            favorites: vec![FavoriteEntry {
                name: "회사".to_string(),
                address: "부산광역시 해운대구 우동".to_string(),
                latitude: 35.1631,
                longitude: 129.1635,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn log_filter_verbosity() {
        assert_eq!(log_filter_from_verbosity(0), None);
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn parse_instant_formats() {
        let expected = chrono::NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        assert_eq!(parse_instant("2026-10-18T08:15").unwrap(), expected);
        assert_eq!(parse_instant("2026-10-18 08:15").unwrap(), expected);
        assert!(parse_instant("08:15").is_err());
    }

    #[test]
    fn cli_parses_grid_command() {
        let cli = parse(&["hanul", "grid", "37.5665", "126.978"]).unwrap();
        assert!(matches!(cli.command, Commands::Grid { latitude, .. } if (latitude - 37.5665).abs() < 1e-9));
    }

    #[test]
    fn cli_parses_negative_coordinates() {
        let cli = parse(&["hanul", "region", "-33.9", "151.2"]).unwrap();
        assert!(matches!(cli.command, Commands::Region { latitude, .. } if latitude < 0.0));
    }

    #[test]
    fn cli_parses_base_time_with_instant() {
        let cli = parse(&["hanul", "base-time", "--at", "2026-10-18T01:30"]).unwrap();
        assert!(matches!(cli.command, Commands::BaseTime { at: Some(_) }));
        assert!(parse(&["hanul", "base-time", "--at", "yesterday"]).is_err());
    }

    #[test]
    fn cli_parses_forecast_options() {
        let cli = parse(&["hanul", "-vv", "forecast", "--favorite", "회사", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Forecast {
                favorite,
                json,
                hours,
                latitude,
                ..
            } => {
                assert_eq!(favorite.as_deref(), Some("회사"));
                assert!(json);
                assert_eq!(hours, DEFAULT_HOURLY_SLOTS);
                assert!(latitude.is_none());
            },
            _ => unreachable!("expected forecast command"),
        }
    }

    #[test]
    fn cli_rejects_half_a_coordinate() {
        assert!(parse(&["hanul", "forecast", "37.5"]).is_err());
    }

    #[test]
    fn cli_rejects_coordinates_with_favorite() {
        assert!(parse(&["hanul", "forecast", "37.5", "127.0", "--favorite", "집"]).is_err());
    }

    #[test]
    fn cli_parses_config_path() {
        let cli = parse(&["hanul", "config", "--config", "/etc/hanul.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/hanul.toml")));
    }

    #[test]
    fn location_from_coordinates() {
        let location =
            resolve_location(&AppConfig::default(), Some((35.1796, 129.0756)), None).unwrap();
        assert!((location.latitude() - 35.1796).abs() < f64::EPSILON);
        assert!(resolve_location(&AppConfig::default(), Some((95.0, 127.0)), None).is_err());
    }

    #[test]
    fn location_from_favorite_name_or_address() {
        let config = config_with_favorite();
        let by_name = resolve_location(&config, None, Some("회사")).unwrap();
        let by_address = resolve_location(&config, None, Some("부산광역시 해운대구 우동")).unwrap();
        assert_eq!(by_name, by_address);
        assert!(resolve_location(&config, None, Some("집")).is_err());
    }

    #[test]
    fn location_defaults_to_configured_then_seoul() {
        assert_eq!(
            resolve_location(&AppConfig::default(), None, None).unwrap(),
            GpsCoordinate::seoul_city_hall()
        );

        let config = AppConfig {
            default_location: Some(LocationConfig {
                latitude: 33.4996,
                longitude: 126.5312,
            }),
            ..Default::default()
        };
        let location = resolve_location(&config, None, None).unwrap();
        assert!((location.longitude() - 126.5312).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"[telemetry]\nlog_filter = \"warn\"\n").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.telemetry.log_filter, "warn");
        assert!(load_config(Some(Path::new("/nonexistent/hanul.toml"))).is_err());
    }

    #[test]
    fn config_renders_as_toml_without_secret() {
        let mut config = config_with_favorite();
        config.kma.service_key = Some("top-secret".to_string().into());
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(rendered.contains("[cache]"));
        assert!(rendered.contains("회사"));
        assert!(!rendered.contains("top-secret"));
    }
}
