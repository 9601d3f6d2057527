//! Geographic point on a sphere
//!
//! Finds points within a distance of a latitude/longitude point using
//! bounding coordinates, see
//! <http://janmatuschek.de/LatitudeLongitudeBoundingCoordinates>.

use std::fmt;

use log::debug;

use super::angle::{self, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, TWO_PI};
use super::bounds::BoundingRegion;
use super::lonlat::{LonLat, LonLatPair};
use crate::config;
use crate::errors::{GeoError, GeoResult};

/// A latitude/longitude location on a sphere of a given radius
///
/// The angles are stored either in degrees or in radians, never mixed.
/// The radius fixes the linear unit of every distance passed to or
/// returned from this point.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
    radius: f64,
    radians: bool,
}

impl GeoPoint {
    fn build(lon: f64, lat: f64, radius: f64, radians: bool, validate: bool) -> GeoResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeoError::InvalidRadius(radius));
        }

        let point = GeoPoint { lon, lat, radius, radians };
        if validate && !point.is_valid() {
            return Err(GeoError::InvalidCoordinate { lon, lat, radians });
        }
        Ok(point)
    }

    /// Create a point from degrees using the process-wide default radius
    pub fn from_degrees(lon: f64, lat: f64) -> GeoResult<Self> {
        Self::from_degrees_with_radius(lon, lat, config::default_radius())
    }

    /// Create a point from degrees on a sphere of the given radius
    pub fn from_degrees_with_radius(lon: f64, lat: f64, radius: f64) -> GeoResult<Self> {
        Self::build(lon, lat, radius, false, true)
    }

    /// Create a point from radians using the process-wide default radius
    pub fn from_radians(lon: f64, lat: f64) -> GeoResult<Self> {
        Self::from_radians_with_radius(lon, lat, config::default_radius())
    }

    /// Create a point from radians on a sphere of the given radius
    pub fn from_radians_with_radius(lon: f64, lat: f64, radius: f64) -> GeoResult<Self> {
        Self::build(lon, lat, radius, true, true)
    }

    /// Create a point from radians without checking the coordinate ranges
    ///
    /// The radius is still checked. Out-of-range points are useful as
    /// intermediate corner candidates but will report `is_valid() == false`.
    pub fn from_radians_unchecked(lon: f64, lat: f64, radius: f64) -> GeoResult<Self> {
        Self::build(lon, lat, radius, true, false)
    }

    /// Adapt any degree-based location using the process-wide default radius
    pub fn from_lonlat<T: LonLat + ?Sized>(lonlat: &T) -> GeoResult<Self> {
        Self::from_degrees(lonlat.lon(), lonlat.lat())
    }

    /// Adapt any degree-based location onto a sphere of the given radius
    pub fn from_lonlat_with_radius<T: LonLat + ?Sized>(lonlat: &T, radius: f64) -> GeoResult<Self> {
        Self::from_degrees_with_radius(lonlat.lon(), lonlat.lat(), radius)
    }

    /// Longitude, in this point's angle unit
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude, in this point's angle unit
    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_radians(&self) -> bool {
        self.radians
    }

    /// This point with its angles in radians
    pub fn to_radians(&self) -> GeoPoint {
        if self.radians {
            return *self;
        }
        GeoPoint {
            lon: angle::to_radians(self.lon),
            lat: angle::to_radians(self.lat),
            radius: self.radius,
            radians: true,
        }
    }

    /// This point with its angles in degrees
    pub fn to_degrees(&self) -> GeoPoint {
        if !self.radians {
            return *self;
        }
        GeoPoint {
            lon: angle::to_degrees(self.lon),
            lat: angle::to_degrees(self.lat),
            radius: self.radius,
            radians: false,
        }
    }

    /// Convert to the requested angle unit
    pub(crate) fn to_unit(&self, radians: bool) -> GeoPoint {
        if radians { self.to_radians() } else { self.to_degrees() }
    }

    /// Degree longitude/latitude of this point
    pub fn to_lonlat(&self) -> LonLatPair {
        let point = self.to_degrees();
        LonLatPair::new(point.lon, point.lat)
    }

    /// Whether both angles fall inside the canonical ranges
    pub fn is_valid(&self) -> bool {
        let point = self.to_radians();
        angle::in_range(point.lon, point.lat)
    }

    /// Great-circle distance to another point, in the unit of this point's radius
    ///
    /// Uses the spherical law of cosines. The radius of `other` is ignored.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let p1 = self.to_radians();
        let p2 = other.to_radians();
        if p1.lat == p2.lat && p1.lon == p2.lon {
            return 0.0;
        }

        let cos_angle = p1.lat.sin() * p2.lat.sin()
            + p1.lat.cos() * p2.lat.cos() * (p1.lon - p2.lon).cos();

        // Rounding can push identical or antipodal points just outside acos' domain
        cos_angle.clamp(-1.0, 1.0).acos() * self.radius
    }

    /// Great-circle distance to any degree-based location
    pub fn distance_to_lonlat<T: LonLat + ?Sized>(&self, other: &T) -> GeoResult<f64> {
        let point = GeoPoint::from_lonlat_with_radius(other, self.radius)?;
        Ok(self.distance_to(&point))
    }

    /// Compute the bounding coordinates of all points within `distance`
    ///
    /// `distance` is in the unit of this point's radius. The result holds
    /// two corners (one box) or, when the search circle crosses the 180th
    /// meridian, four corners (two boxes). Corners use this point's angle
    /// unit.
    pub fn bounding_coordinates(&self, distance: f64) -> GeoResult<BoundingRegion> {
        if distance.is_nan() || distance <= 0.0 {
            return Err(GeoError::InvalidDistance(distance));
        }

        // angular distance in radians on a great circle
        let angular = distance / self.radius;
        let point = self.to_radians();

        let mut min_lat = point.lat - angular;
        let mut max_lat = point.lat + angular;
        let min_lon;
        let max_lon;

        if min_lat > MIN_LAT && max_lat < MAX_LAT {
            let delta_lon = (angular.sin() / point.lat.cos()).asin();
            min_lon = point.lon - delta_lon;
            max_lon = point.lon + delta_lon;
        } else {
            debug!("Pole within {} of {}, using full longitude band", distance, self);
            min_lat = min_lat.max(MIN_LAT);
            max_lat = max_lat.min(MAX_LAT);
            min_lon = MIN_LON;
            max_lon = MAX_LON;
        }

        let bounds = self.split_at_antimeridian(min_lat, min_lon, max_lat, max_lon)?;
        Ok(if self.radians { bounds } else { bounds.to_degrees() })
    }

    /// Build the region for raw radian extents, splitting it in two when
    /// the longitude band wraps past ±180°
    fn split_at_antimeridian(&self, min_lat: f64, min_lon: f64,
                             max_lat: f64, max_lon: f64) -> GeoResult<BoundingRegion> {
        let corner = |lat: f64, lon: f64| GeoPoint::from_radians_unchecked(lon, lat, self.radius);

        if min_lon < MIN_LON {
            debug!("Search circle crosses the 180th meridian westward");
            BoundingRegion::from_points(&[
                corner(min_lat, min_lon + TWO_PI)?,
                corner(max_lat, MAX_LON)?,
                corner(min_lat, MIN_LON)?,
                corner(max_lat, max_lon)?,
            ])
        } else if max_lon > MAX_LON {
            debug!("Search circle crosses the 180th meridian eastward");
            BoundingRegion::from_points(&[
                corner(min_lat, min_lon)?,
                corner(max_lat, MAX_LON)?,
                corner(min_lat, MIN_LON)?,
                corner(max_lat, max_lon - TWO_PI)?,
            ])
        } else {
            BoundingRegion::from_points(&[
                corner(min_lat, min_lon)?,
                corner(max_lat, max_lon)?,
            ])
        }
    }
}

/// Exact comparison after converting `other` to this point's unit
impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        let other = other.to_unit(self.radians);
        other.lon == self.lon && other.lat == self.lat && other.radius == self.radius
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = if self.radians { " rad" } else { "°" };
        write!(f, "GeoPoint({}{}, {}{})", self.lat, units, self.lon, units)
    }
}
