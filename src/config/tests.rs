//! Tests for radius configuration

use std::io::Write;

use super::file::{load_config, parse_config};
use super::*;
use crate::errors::GeoError;
use crate::test_support::DEFAULT_CONFIG_LOCK;

#[test]
fn test_unit_presets() {
    assert_eq!(DistanceUnit::Kilometers.earth_radius(), 6371.01);
    assert_eq!(DistanceUnit::Miles.earth_radius(), 3963.19);
    assert_eq!(RadiusConfig::default().radius(), EARTH_RADIUS_KM);
    assert_eq!(RadiusConfig::default().unit(), Some(DistanceUnit::Kilometers));
}

#[test]
fn test_unit_tokens() {
    assert_eq!("km".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
    assert_eq!(" Miles ".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
    assert_eq!(DistanceUnit::from_token("mi").unwrap(), DistanceUnit::Miles);
    assert_eq!(DistanceUnit::from_token("m").unwrap(), DistanceUnit::Miles);
    assert!(matches!(DistanceUnit::from_token("furlongs"), Err(GeoError::InvalidUnit(_))));
    assert_eq!(DistanceUnit::Miles.to_string(), "mi");
}

#[test]
fn test_explicit_radius() {
    let config = RadiusConfig::with_radius(42.0).unwrap();
    assert_eq!(config.radius(), 42.0);
    assert_eq!(config.unit(), None);
    assert!(matches!(RadiusConfig::with_radius(0.0), Err(GeoError::InvalidRadius(_))));
    assert!(RadiusConfig::with_radius(f64::NAN).is_err());
}

#[test]
fn test_global_default() {
    let _guard = DEFAULT_CONFIG_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    assert_eq!(default_radius(), EARTH_RADIUS_KM);

    set_units("mi").unwrap();
    assert_eq!(default_radius(), EARTH_RADIUS_MI);
    assert_eq!(default_config().unit(), Some(DistanceUnit::Miles));

    // A rejected token leaves the default alone
    assert!(set_units("parsecs").is_err());
    assert_eq!(default_radius(), EARTH_RADIUS_MI);

    set_units("km").unwrap();
    assert_eq!(default_radius(), EARTH_RADIUS_KM);

    set_radius(1.5).unwrap();
    assert_eq!(default_radius(), 1.5);
    assert_eq!(default_config().unit(), None);
    assert!(set_radius(-1.0).is_err());
    assert_eq!(default_radius(), 1.5);

    reset_default();
    assert_eq!(default_radius(), EARTH_RADIUS_KM);
}

#[test]
fn test_snapshot_is_stable() {
    let _guard = DEFAULT_CONFIG_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let snapshot = default_config();
    set_units("mi").unwrap();
    assert_eq!(snapshot.radius(), EARTH_RADIUS_KM);
    reset_default();
}

#[test]
fn test_parse_config() {
    let config = parse_config("units = \"mi\"").unwrap();
    assert_eq!(config, RadiusConfig::new(DistanceUnit::Miles));

    let config = parse_config("units = \"mi\"\nradius = 3958.8").unwrap();
    assert_eq!(config.radius(), 3958.8);
    assert_eq!(config.unit(), None);

    let config = parse_config("radius = 6371").unwrap();
    assert_eq!(config.radius(), 6371.0);

    assert_eq!(parse_config("").unwrap(), RadiusConfig::default());
    assert!(matches!(parse_config("units = 3"), Err(GeoError::ConfigError(_))));
    assert!(matches!(parse_config("units = \"ly\""), Err(GeoError::InvalidUnit(_))));
    assert!(matches!(parse_config("radius = -2.0"), Err(GeoError::InvalidRadius(_))));
    assert!(matches!(parse_config("radius = [1"), Err(GeoError::ConfigError(_))));
}

#[test]
fn test_load_config_file() {
    let path = std::env::temp_dir().join(format!("geobounds-config-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "units = \"km\"").unwrap();
    }
    let config = load_config(path.to_str().unwrap()).unwrap();
    assert_eq!(config.radius(), EARTH_RADIUS_KM);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(load_config(path.to_str().unwrap()), Err(GeoError::IoError(_))));
}
