//! Default location and saved favorites

use domain::{DomainError, GpsCoordinate};
use serde::{Deserialize, Serialize};

/// A bare position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationConfig {
    /// Validate into a coordinate
    pub fn coordinate(&self) -> Result<GpsCoordinate, DomainError> {
        GpsCoordinate::new(self.latitude, self.longitude)
    }
}

/// One saved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Display name
    pub name: String,
    /// Full address, unique within the list
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl FavoriteEntry {
    /// Validate the position of this entry
    pub fn location(&self) -> Result<GpsCoordinate, DomainError> {
        GpsCoordinate::new(self.latitude, self.longitude)
    }
}
