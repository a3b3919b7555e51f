//! Turning raw forecast payloads into display-ready series
//!
//! Everything here is pure and total: sparse or malformed upstream data
//! degrades to empty strings, zeros or placeholders.

mod conditions;
mod index;
mod mid_term;
mod short_term;
mod summary;

pub use conditions::{PrecipitationType, SkyState, weather_text};
pub use index::{CurrentConditions, DEFAULT_HOURLY_SLOTS, ForecastIndex, HourlySlot, MinMax};
pub use mid_term::{MID_TERM_DAYS, PENDING_FORECAST, merge_weekly, mid_term_weekly};
pub use short_term::{SHORT_TERM_DAYS, short_term_daily};
pub use summary::{NO_INFORMATION, WeatherKind, max_rain_probability, representative_weather};
