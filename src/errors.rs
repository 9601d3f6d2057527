//! Custom error types for coordinate and bounding region processing

use std::fmt;
use std::io;

/// Geographic computation error types
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Sphere radius was not a positive number
    InvalidRadius(f64),
    /// Latitude or longitude outside the canonical range
    InvalidCoordinate { lon: f64, lat: f64, radians: bool },
    /// Search distance was not a positive number
    InvalidDistance(f64),
    /// Unrecognized distance unit token
    InvalidUnit(String),
    /// A bounding region needs exactly 2 or 4 corner points
    InvalidRegion(usize),
    /// Malformed textual input (coordinates, numbers)
    ParseError(String),
    /// Malformed configuration file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidRadius(r) => write!(f, "Invalid radius: {} (must be positive)", r),
            GeoError::InvalidCoordinate { lon, lat, radians } => {
                let units = if *radians { "rad" } else { "deg" };
                write!(f, "Invalid coordinates: lon={} lat={} ({})", lon, lat, units)
            },
            GeoError::InvalidDistance(d) => write!(f, "Invalid distance: {} (must be positive)", d),
            GeoError::InvalidUnit(u) => write!(f, "Invalid units: '{}' (expected km or mi)", u),
            GeoError::InvalidRegion(n) => write!(f, "Bounding region needs 2 or 4 points, got {}", n),
            GeoError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

/// Result type for geographic operations
pub type GeoResult<T> = Result<T, GeoError>;

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}
