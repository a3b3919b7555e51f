//! Domain entities - Forecast records and saved locations

mod daily_forecast;
mod favorite;
mod forecast_item;
mod mid_term;

pub use daily_forecast::{DailyForecast, date_label, weekday_ko};
pub use favorite::{Favorite, FavoriteList, short_address};
pub use forecast_item::{Category, ForecastItem};
pub use mid_term::{HalfDayOutlook, MidTermLandForecast, MidTermTemperatureForecast};
