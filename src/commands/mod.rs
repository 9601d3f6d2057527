//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod distance_command;
pub mod bounds_command;

pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use bounds_command::BoundsCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::debug;

use crate::api::GeoBounds;
use crate::config::{self, file::load_config, RadiusConfig};
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geobounds")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Great-circle distances and bounding coordinates for radius queries")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with 'units' and/or 'radius'")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("units")
                .short('u')
                .long("units")
                .help("Distance units (km or mi)")
                .value_name("UNITS")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("radius")
                .short('r')
                .long("radius")
                .help("Sphere radius, overrides --units")
                .value_name("RADIUS")
                .value_parser(clap::value_parser!(f64))
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value("geobounds.log")
                .global(true),
        )
        .arg(
            Arg::new("no-log-file")
                .long("no-log-file")
                .help("Log to the console only")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance between two points")
                .arg(location_arg("from", 1, "Start point as 'lon,lat' in degrees"))
                .arg(location_arg("to", 2, "End point as 'lon,lat' in degrees")),
        )
        .subcommand(
            ClapCommand::new("bounds")
                .about("Bounding boxes of all points within a distance")
                .arg(location_arg("point", 1, "Center point as 'lon,lat' in degrees"))
                .arg(
                    Arg::new("distance")
                        .help("Search distance in the radius unit")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(f64))
                        .index(2),
                )
                .arg(
                    Arg::new("radians")
                        .long("radians")
                        .help("Print corners in radians")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn location_arg(name: &'static str, index: usize, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        // Western longitudes start with '-'
        .allow_hyphen_values(true)
        .index(index)
}

/// Resolve the radius configuration from CLI arguments
///
/// Precedence, lowest first: process default, `--config` file, `--units`,
/// `--radius`.
pub fn resolve_config(args: &ArgMatches) -> GeoResult<RadiusConfig> {
    let mut resolved = *config::default_config();

    if let Some(path) = args.get_one::<String>("config") {
        debug!("Loading configuration from {}", path);
        resolved = load_config(path)?;
    }

    if let Some(units) = args.get_one::<String>("units") {
        resolved = RadiusConfig::from_units(units)?;
    }

    if let Some(radius) = args.get_one::<f64>("radius") {
        resolved = RadiusConfig::with_radius(*radius)?;
    }

    debug!("Using radius {} ({:?})", resolved.radius(), resolved.unit());
    Ok(resolved)
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
pub struct GeoboundsCommandFactory;

impl GeoboundsCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoboundsCommandFactory
    }
}

impl Default for GeoboundsCommandFactory {
    fn default() -> Self {
        GeoboundsCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for GeoboundsCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        let (name, sub_args) = args.subcommand()
            .ok_or_else(|| GeoError::GenericError("No command given".to_string()))?;

        // Global options are propagated into the subcommand matches
        let api = GeoBounds::new(resolve_config(sub_args)?);

        match name {
            "distance" => Ok(Box::new(DistanceCommand::new(sub_args, api, logger)?)),
            "bounds" => Ok(Box::new(BoundsCommand::new(sub_args, api, logger)?)),
            other => Err(GeoError::GenericError(format!("Unknown command: {}", other))),
        }
    }
}
