//! Favorite location identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for a saved location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteId(Uuid);

impl FavoriteId {
    /// Create a new random favorite ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a favorite ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for FavoriteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
