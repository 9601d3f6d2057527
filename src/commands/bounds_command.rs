//! Bounding coordinates command

use clap::ArgMatches;
use log::{debug, info};

use crate::api::GeoBounds;
use crate::commands::command_traits::Command;
use crate::commands::distance_command::parse_location;
use crate::coordinate::{BoundingRegion, LonLatPair};
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;

/// Command computing the bounding boxes around a location
pub struct BoundsCommand<'a> {
    /// Center location in degrees
    center: LonLatPair,
    /// Search distance in the unit of the configured radius
    distance: f64,
    /// Whether to print the corners in radians
    radians: bool,
    /// Configured entry point
    api: GeoBounds,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BoundsCommand<'a> {
    /// Create a new bounds command
    ///
    /// # Arguments
    /// * `args` - Matches of the `bounds` subcommand
    /// * `api` - Entry point configured with the sphere radius
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new BoundsCommand instance or an error
    pub fn new(args: &ArgMatches, api: GeoBounds, logger: &'a Logger) -> GeoResult<Self> {
        let center = parse_location(args, "point")?;
        let distance = *args.get_one::<f64>("distance")
            .ok_or_else(|| GeoError::GenericError("Missing search distance".to_string()))?;
        let radians = args.get_flag("radians");

        Ok(BoundsCommand { center, distance, radians, api, logger })
    }

    /// Format each box as "minlon,minlat,maxlon,maxlat"
    fn format_region(&self, region: &BoundingRegion) -> String {
        let region = if self.radians { region.to_radians() } else { region.to_degrees() };
        region.boxes()
            .iter()
            .map(|b| format!("{},{},{},{}", b.min.lon(), b.min.lat(), b.max.lon(), b.max.lat()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> Command for BoundsCommand<'a> {
    fn render(&self) -> GeoResult<String> {
        info!("Computing bounding coordinates around {} within {}", self.center, self.distance);

        let region = self.api.bounding_region(&self.center, self.distance)?;
        if region.is_split() {
            debug!("Region crosses the 180th meridian");
        }

        self.logger.print_region(&region)?;
        Ok(self.format_region(&region))
    }
}
