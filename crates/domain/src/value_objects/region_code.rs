//! Mid-term forecast region identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque region identifier (`regId`) understood by the mid-term API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Wrap a raw region identifier
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// The pair of codes needed for one location
///
/// Land (sky/rain) and temperature forecasts are partitioned differently
/// upstream, so a location always carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCodes {
    /// Code for the land forecast (`getMidLandFcst`)
    pub land: RegionCode,
    /// Code for the temperature forecast (`getMidTa`)
    pub temperature: RegionCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_code_serializes_as_plain_string() {
        let code = RegionCode::new("11B00000");
        assert_eq!(serde_json::to_string(&code).expect("serialize"), "\"11B00000\"");
        assert_eq!(code.to_string(), "11B00000");
    }
}
