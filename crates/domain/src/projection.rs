//! GPS ⇄ forecast grid projection
//!
//! The short-term forecast API addresses locations by a 5 km grid laid over
//! a Lambert Conformal Conic projection. Both directions are total: invalid
//! coordinates map to a cell the API will reject, never to an error here.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::sync::LazyLock;

use crate::value_objects::{GpsCoordinate, GridCoordinate};

/// Parameters of a Lambert Conformal Conic grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertParameters {
    /// Earth radius (km)
    pub earth_radius_km: f64,
    /// Grid spacing (km)
    pub grid_spacing_km: f64,
    /// First standard parallel (deg)
    pub standard_parallel_1: f64,
    /// Second standard parallel (deg)
    pub standard_parallel_2: f64,
    /// Origin longitude (deg)
    pub origin_longitude: f64,
    /// Origin latitude (deg)
    pub origin_latitude: f64,
    /// Grid column of the origin
    pub origin_x: f64,
    /// Grid row of the origin
    pub origin_y: f64,
}

impl LambertParameters {
    /// The grid used by the KMA village forecast
    pub const KMA: Self = Self {
        earth_radius_km: 6371.008_77,
        grid_spacing_km: 5.0,
        standard_parallel_1: 30.0,
        standard_parallel_2: 60.0,
        origin_longitude: 126.0,
        origin_latitude: 38.0,
        origin_x: 43.0,
        origin_y: 136.0,
    };
}

/// A Lambert grid with its derived constants precomputed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertGrid {
    /// Earth radius in grid units
    re: f64,
    /// Cone constant
    sn: f64,
    sf: f64,
    /// Distance from the apex to the origin in grid units
    ro: f64,
    /// Origin longitude (rad)
    olon: f64,
    xo: f64,
    yo: f64,
}

static KMA_GRID: LazyLock<LambertGrid> =
    LazyLock::new(|| LambertGrid::new(LambertParameters::KMA));

impl LambertGrid {
    /// Derive the projection constants
    #[must_use]
    pub fn new(params: LambertParameters) -> Self {
        let re = params.earth_radius_km / params.grid_spacing_km;
        let slat1 = params.standard_parallel_1.to_radians();
        let slat2 = params.standard_parallel_2.to_radians();
        let olat = params.origin_latitude.to_radians();

        let sn = (slat1.cos() / slat2.cos()).ln()
            / ((FRAC_PI_4 + slat2 * 0.5).tan() / (FRAC_PI_4 + slat1 * 0.5).tan()).ln();
        let sf = (FRAC_PI_4 + slat1 * 0.5).tan().powf(sn) * slat1.cos() / sn;
        let ro = re * sf / (FRAC_PI_4 + olat * 0.5).tan().powf(sn);

        Self {
            re,
            sn,
            sf,
            ro,
            olon: params.origin_longitude.to_radians(),
            xo: params.origin_x,
            yo: params.origin_y,
        }
    }

    /// The KMA village forecast grid
    #[must_use]
    pub fn kma() -> &'static Self {
        &KMA_GRID
    }

    /// Project a GPS coordinate to the nearest grid cell
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_grid(&self, coordinate: GpsCoordinate) -> GridCoordinate {
        let ra = self.re * self.sf
            / (FRAC_PI_4 + coordinate.latitude().to_radians() * 0.5)
                .tan()
                .powf(self.sn);

        let mut theta = coordinate.longitude().to_radians() - self.olon;
        if theta > PI {
            theta -= 2.0 * PI;
        }
        if theta < -PI {
            theta += 2.0 * PI;
        }
        theta *= self.sn;

        let x = ra * theta.sin() + self.xo;
        let y = self.ro - ra * theta.cos() + self.yo;

        GridCoordinate::new((x + 0.5).floor() as i32, (y + 0.5).floor() as i32)
    }

    /// Recover the GPS coordinate of a grid cell's centre
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_gps(&self, grid: GridCoordinate) -> GpsCoordinate {
        let xn = f64::from(grid.nx) - self.xo;
        let yn = self.ro - f64::from(grid.ny) + self.yo;
        let ra = xn.hypot(yn).copysign(self.sn);

        let alat = 2.0 * (self.re * self.sf / ra).powf(1.0 / self.sn).atan() - FRAC_PI_2;

        let theta = if xn == 0.0 {
            0.0
        } else if yn == 0.0 {
            FRAC_PI_2.copysign(xn)
        } else {
            xn.atan2(yn)
        };
        let alon = theta / self.sn + self.olon;

        GpsCoordinate::new_unchecked(alat.to_degrees(), alon.to_degrees())
    }
}

/// Convert a GPS coordinate to its KMA grid cell
#[must_use]
pub fn gps_to_grid(coordinate: GpsCoordinate) -> GridCoordinate {
    LambertGrid::kma().to_grid(coordinate)
}

/// Convert a KMA grid cell back to a GPS coordinate
#[must_use]
pub fn grid_to_gps(grid: GridCoordinate) -> GpsCoordinate {
    LambertGrid::kma().to_gps(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_of(latitude: f64, longitude: f64) -> GridCoordinate {
        gps_to_grid(GpsCoordinate::new_unchecked(latitude, longitude))
    }

    #[test]
    fn seoul_city_hall_maps_to_60_127() {
        assert_eq!(
            gps_to_grid(GpsCoordinate::seoul_city_hall()),
            GridCoordinate::new(60, 127)
        );
    }

    #[test]
    fn origin_maps_to_origin_cell() {
        assert_eq!(grid_of(38.0, 126.0), GridCoordinate::new(43, 136));
    }

    #[test]
    fn origin_cell_maps_back_to_origin() {
        let gps = grid_to_gps(GridCoordinate::new(43, 136));
        assert!((gps.latitude() - 38.0).abs() < 1e-9);
        assert!((gps.longitude() - 126.0).abs() < 1e-9);
    }

    #[test]
    fn east_is_larger_nx_and_north_is_larger_ny() {
        let seoul = grid_of(37.5665, 126.9780);
        let east = grid_of(37.5665, 127.5);
        let north = grid_of(38.2, 126.9780);
        assert!(east.nx > seoul.nx);
        assert!(north.ny > seoul.ny);
    }

    #[test]
    fn out_of_range_input_still_projects() {
        let _ = grid_of(120.0, 400.0);
        let _ = grid_of(-45.0, -70.0);
    }

    #[test]
    fn kma_grid_is_built_from_kma_parameters() {
        assert_eq!(*LambertGrid::kma(), LambertGrid::new(LambertParameters::KMA));
    }

    proptest! {
        #[test]
        fn round_trip_stays_within_half_a_cell(
            latitude in 33.0f64..39.0,
            longitude in 124.0f64..132.0,
        ) {
            let original = GpsCoordinate::new_unchecked(latitude, longitude);
            let back = grid_to_gps(gps_to_grid(original));
            prop_assert!((back.latitude() - latitude).abs() < 0.05);
            prop_assert!((back.longitude() - longitude).abs() < 0.05);
        }

        #[test]
        fn grid_to_gps_to_grid_is_identity(nx in 1i32..150, ny in 1i32..250) {
            let grid = GridCoordinate::new(nx, ny);
            prop_assert_eq!(gps_to_grid(grid_to_gps(grid)), grid);
        }
    }
}
