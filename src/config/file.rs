//! TOML configuration file support
//!
//! A configuration file may name a unit preset, an explicit radius, or
//! both, in which case the explicit radius wins:
//!
//! ```toml
//! units = "mi"
//! radius = 3958.8
//! ```

use std::fs;

use log::debug;

use super::radius::RadiusConfig;
use crate::errors::{GeoError, GeoResult};

/// Parse a radius configuration from TOML text
pub fn parse_config(content: &str) -> GeoResult<RadiusConfig> {
    let table: toml::Table = match content.parse() {
        Ok(value) => value,
        Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
    };

    let mut config = RadiusConfig::default();

    if let Some(units) = table.get("units") {
        let token = units.as_str()
            .ok_or_else(|| GeoError::ConfigError("'units' must be a string".to_string()))?;
        config = RadiusConfig::from_units(token)?;
    }

    if let Some(radius) = table.get("radius") {
        // Accept integer radii as well as floats
        let value = radius.as_float()
            .or_else(|| radius.as_integer().map(|i| i as f64))
            .ok_or_else(|| GeoError::ConfigError("'radius' must be a number".to_string()))?;
        config = RadiusConfig::with_radius(value)?;
    }

    debug!("Parsed radius configuration: {:?}", config);
    Ok(config)
}

/// Load a radius configuration from a TOML file
pub fn load_config(path: &str) -> GeoResult<RadiusConfig> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}
