//! KMA forecast grid coordinate

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell address on the 5 km forecast grid (`nx`, `ny`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    /// Column index
    pub nx: i32,
    /// Row index
    pub ny: i32,
}

impl GridCoordinate {
    /// Create a grid coordinate
    #[must_use]
    pub const fn new(nx: i32, ny: i32) -> Self {
        Self { nx, ny }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.nx, self.ny)
    }
}
