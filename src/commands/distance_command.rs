//! Great-circle distance command

use clap::ArgMatches;
use log::info;

use crate::api::GeoBounds;
use crate::commands::command_traits::Command;
use crate::coordinate::LonLatPair;
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;

/// Command computing the distance between two locations
pub struct DistanceCommand<'a> {
    /// Start location in degrees
    from: LonLatPair,
    /// End location in degrees
    to: LonLatPair,
    /// Configured entry point
    api: GeoBounds,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - Matches of the `distance` subcommand
    /// * `api` - Entry point configured with the sphere radius
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches, api: GeoBounds, logger: &'a Logger) -> GeoResult<Self> {
        let from = parse_location(args, "from")?;
        let to = parse_location(args, "to")?;

        Ok(DistanceCommand { from, to, api, logger })
    }
}

/// Read a "lon,lat" positional argument
pub(crate) fn parse_location(args: &ArgMatches, name: &str) -> GeoResult<LonLatPair> {
    let raw = args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing {} coordinate", name)))?;
    LonLatPair::from_string(raw)
}

impl<'a> Command for DistanceCommand<'a> {
    fn render(&self) -> GeoResult<String> {
        info!("Computing distance from {} to {}", self.from, self.to);

        let distance = self.api.distance(&self.from, &self.to)?;
        let output = match self.api.config().unit() {
            Some(unit) => format!("{:.3} {}", distance, unit),
            None => format!("{:.3}", distance),
        };

        self.logger.log(&format!("Distance {} -> {}: {}", self.from, self.to, output))?;
        Ok(output)
    }
}
