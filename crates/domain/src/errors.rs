//! Domain-level errors
//!
//! The forecast core itself never fails; these cover input validation and
//! the favorites list.

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the WGS84 range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// The favorites list is full
    #[error("Favorites limit reached: at most {0} locations can be saved")]
    FavoritesLimitReached(usize),

    /// The address is already saved as a favorite
    #[error("Location already saved as favorite: {0}")]
    DuplicateFavorite(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
