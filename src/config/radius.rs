//! Radius configuration values and the process-wide default

use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use log::debug;

use super::units::DistanceUnit;
use crate::errors::{GeoError, GeoResult};

/// Sphere radius used for distance computations
///
/// `unit` records the preset the radius came from; it is `None` when the
/// radius was supplied directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusConfig {
    radius: f64,
    unit: Option<DistanceUnit>,
}

impl RadiusConfig {
    /// Create a configuration from a unit preset
    pub fn new(unit: DistanceUnit) -> Self {
        RadiusConfig {
            radius: unit.earth_radius(),
            unit: Some(unit),
        }
    }

    /// Create a configuration from an explicit radius
    pub fn with_radius(radius: f64) -> GeoResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeoError::InvalidRadius(radius));
        }
        Ok(RadiusConfig { radius, unit: None })
    }

    /// Create a configuration from a unit token such as "km" or "mi"
    pub fn from_units(token: &str) -> GeoResult<Self> {
        Ok(RadiusConfig::new(DistanceUnit::from_token(token)?))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn unit(&self) -> Option<DistanceUnit> {
        self.unit
    }
}

impl Default for RadiusConfig {
    fn default() -> Self {
        RadiusConfig::new(DistanceUnit::default())
    }
}

lazy_static! {
    // Swapped as a whole so readers always see a consistent radius/unit pair
    static ref DEFAULT_CONFIG: RwLock<Arc<RadiusConfig>> =
        RwLock::new(Arc::new(RadiusConfig::default()));
}

/// Snapshot of the current process-wide default
pub fn default_config() -> Arc<RadiusConfig> {
    let guard = DEFAULT_CONFIG.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    Arc::clone(&guard)
}

/// Radius of the current process-wide default
pub fn default_radius() -> f64 {
    default_config().radius()
}

/// Replace the process-wide default
pub fn set_default(config: RadiusConfig) {
    debug!("Setting default radius to {} ({:?})", config.radius(), config.unit());
    let mut guard = DEFAULT_CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Arc::new(config);
}

/// Set the process-wide default from a unit token
///
/// The default is left untouched when the token is not recognized.
pub fn set_units(token: &str) -> GeoResult<()> {
    set_default(RadiusConfig::from_units(token)?);
    Ok(())
}

/// Override the process-wide default radius directly
pub fn set_radius(radius: f64) -> GeoResult<()> {
    set_default(RadiusConfig::with_radius(radius)?);
    Ok(())
}

/// Restore the kilometer default
pub fn reset_default() {
    set_default(RadiusConfig::default());
}
