//! Sphere radius configuration
//!
//! Distances are expressed in whatever linear unit the sphere radius is
//! given in. This module provides the unit presets, an explicit
//! configuration value, and the process-wide default consulted when a
//! point is built without a radius.

mod units;
mod radius;
pub mod file;

#[cfg(test)]
mod tests;

pub use self::units::{DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use self::radius::{
    RadiusConfig, default_config, default_radius, reset_default, set_default, set_radius,
    set_units,
};
