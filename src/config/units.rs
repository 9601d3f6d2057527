//! Distance unit presets

use std::fmt;
use std::str::FromStr;

use crate::errors::{GeoError, GeoResult};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MI: f64 = 3963.19;

/// Linear unit in which distances and the sphere radius are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Earth radius expressed in this unit
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MI,
        }
    }

    /// Short unit token ("km" or "mi")
    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }

    /// Parse a unit token
    ///
    /// Accepts "km"/"kilometers" and "mi"/"miles". A bare "m" is read as
    /// miles for compatibility with older configuration files.
    pub fn from_token(token: &str) -> GeoResult<Self> {
        match token.trim().to_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "mi" | "m" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            _ => Err(GeoError::InvalidUnit(token.to_string())),
        }
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        DistanceUnit::Kilometers
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceUnit::from_token(s)
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
