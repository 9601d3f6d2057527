//! Longitude/latitude adapters

use std::fmt;
use std::str::FromStr;

use crate::errors::{GeoError, GeoResult};

/// Anything that can report a longitude and latitude in degrees
///
/// Implement this for your own location types to build a
/// [`GeoPoint`](super::GeoPoint) from them with `GeoPoint::from_lonlat`.
pub trait LonLat {
    /// Longitude in degrees
    fn lon(&self) -> f64;
    /// Latitude in degrees
    fn lat(&self) -> f64;
}

/// A bare longitude/latitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLatPair {
    pub lon: f64,
    pub lat: f64,
}

impl LonLatPair {
    pub fn new(lon: f64, lat: f64) -> Self {
        LonLatPair { lon, lat }
    }

    /// Parse a pair from a string (format: "lon,lat")
    pub fn from_string(coord_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = coord_str.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoError::ParseError(format!(
                "Coordinate must be in format 'lon,lat', got '{}'", coord_str)));
        }

        let lon = parts[0].trim().parse::<f64>()
            .map_err(|_| GeoError::ParseError(format!("Invalid longitude: '{}'", parts[0].trim())))?;
        let lat = parts[1].trim().parse::<f64>()
            .map_err(|_| GeoError::ParseError(format!("Invalid latitude: '{}'", parts[1].trim())))?;

        Ok(LonLatPair::new(lon, lat))
    }
}

impl LonLat for LonLatPair {
    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }
}

/// Tuples are read as `(lon, lat)`
impl LonLat for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }

    fn lat(&self) -> f64 {
        self.1
    }
}

impl<T: LonLat + ?Sized> LonLat for &T {
    fn lon(&self) -> f64 {
        (**self).lon()
    }

    fn lat(&self) -> f64 {
        (**self).lat()
    }
}

impl FromStr for LonLatPair {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LonLatPair::from_string(s)
    }
}

impl fmt::Display for LonLatPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}
