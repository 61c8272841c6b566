use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;
    pub const MIN_LNG: f64 = -180.0;
    pub const MAX_LNG: f64 = 180.0;

    /// Builds a coordinate, rejecting NaN and out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !(Self::MIN_LAT..=Self::MAX_LAT).contains(&lat) {
            return Err(AtlasError::InvalidCoordinate(format!(
                "latitude {} is outside [-90, 90]",
                lat
            )));
        }
        if !lng.is_finite() || !(Self::MIN_LNG..=Self::MAX_LNG).contains(&lng) {
            return Err(AtlasError::InvalidCoordinate(format!(
                "longitude {} is outside [-180, 180]",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    /// Builds a coordinate by clamping into the valid range.
    pub fn clamped(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.clamp(Self::MIN_LAT, Self::MAX_LAT),
            lng: lng.clamp(Self::MIN_LNG, Self::MAX_LNG),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
