//! Value Objects - Immutable, identity-less domain primitives

mod base_date_time;
mod favorite_id;
mod gps_coordinate;
mod grid_coordinate;
mod region_code;

pub use base_date_time::BaseDateTime;
pub use favorite_id::FavoriteId;
pub use gps_coordinate::GpsCoordinate;
pub use grid_coordinate::GridCoordinate;
pub use region_code::{RegionCode, RegionCodes};
