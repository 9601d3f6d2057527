use log::{debug, info};

use crate::config::{self, RadiusConfig};
use crate::coordinate::{BoundingRegion, GeoPoint, LonLat};
use crate::errors::GeoResult;

/// Main interface to the geobounds library
///
/// Holds an explicit radius configuration so that callers never depend on
/// the process-wide default once the instance is built.
#[derive(Debug, Clone, Copy)]
pub struct GeoBounds {
    config: RadiusConfig,
}

impl GeoBounds {
    /// Create a GeoBounds instance for the given radius configuration
    pub fn new(config: RadiusConfig) -> Self {
        GeoBounds { config }
    }

    /// Create a GeoBounds instance from a snapshot of the process-wide default
    pub fn from_default() -> Self {
        GeoBounds::new(*config::default_config())
    }

    pub fn config(&self) -> &RadiusConfig {
        &self.config
    }

    /// Build a point on this instance's sphere
    ///
    /// # Arguments
    /// * `location` - Longitude/latitude in degrees
    ///
    /// # Returns
    /// The point or an error if the coordinates are out of range
    pub fn point<T: LonLat + ?Sized>(&self, location: &T) -> GeoResult<GeoPoint> {
        GeoPoint::from_lonlat_with_radius(location, self.config.radius())
    }

    /// Great-circle distance between two locations
    ///
    /// # Arguments
    /// * `from` - First location in degrees
    /// * `to` - Second location in degrees
    ///
    /// # Returns
    /// Distance in the unit of the configured radius
    pub fn distance<A, B>(&self, from: &A, to: &B) -> GeoResult<f64>
    where
        A: LonLat + ?Sized,
        B: LonLat + ?Sized,
    {
        let distance = self.point(from)?.distance_to(&self.point(to)?);
        debug!("Distance {},{} -> {},{}: {}", from.lon(), from.lat(), to.lon(), to.lat(), distance);
        Ok(distance)
    }

    /// Bounding coordinates of every point within `distance` of `center`
    ///
    /// # Arguments
    /// * `center` - Center location in degrees
    /// * `distance` - Search radius in the unit of the configured radius
    ///
    /// # Returns
    /// A region of one or two boxes in degrees
    pub fn bounding_region<T: LonLat + ?Sized>(&self, center: &T, distance: f64) -> GeoResult<BoundingRegion> {
        let region = self.point(center)?.bounding_coordinates(distance)?;
        info!("Bounding region for {},{} within {}: {} box(es)",
              center.lon(), center.lat(), distance, region.boxes().len());
        Ok(region)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        GeoBounds::new(RadiusConfig::default())
    }
}
