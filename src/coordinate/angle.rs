//! Degree/radian conversion and canonical coordinate ranges
//!
//! All trigonometry in this crate runs in radians. No clamping or
//! normalization happens here.

use std::f64::consts::PI;

/// Multiplier converting degrees to radians
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// Multiplier converting radians to degrees
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Full turn in radians
pub const TWO_PI: f64 = 2.0 * PI;

pub const MIN_LAT: f64 = -PI / 2.0;
pub const MAX_LAT: f64 = PI / 2.0;
pub const MIN_LON: f64 = -PI;
pub const MAX_LON: f64 = PI;

/// Convert an angle in degrees to radians
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Convert an angle in radians to degrees
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Check a radian latitude/longitude pair against the canonical ranges
#[inline]
pub fn in_range(lon: f64, lat: f64) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&lat) && (MIN_LON..=MAX_LON).contains(&lon)
}
