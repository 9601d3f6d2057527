//! Bounding region structure for radius queries

use std::fmt;
use std::ops::Index;

use super::point::GeoPoint;
use crate::errors::{GeoError, GeoResult};

/// One axis-aligned latitude/longitude box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonBox {
    /// Corner with the minimum latitude and longitude
    pub min: GeoPoint,
    /// Corner with the maximum latitude and longitude
    pub max: GeoPoint,
}

impl LatLonBox {
    /// Check if this box contains a point
    ///
    /// This is only the coordinate-range pre-filter; points inside the box
    /// may still be further away than the search distance.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let point = point.to_unit(self.min.is_radians());
        let max = self.max.to_unit(self.min.is_radians());
        point.lat() >= self.min.lat() && point.lat() <= max.lat() &&
            point.lon() >= self.min.lon() && point.lon() <= max.lon()
    }

    /// Get the latitude span of the box, in the corners' angle unit
    pub fn height(&self) -> f64 {
        self.max.lat() - self.min.lat()
    }

    /// Get the longitude span of the box, in the corners' angle unit
    pub fn width(&self) -> f64 {
        self.max.lon() - self.min.lon()
    }
}

/// Renders as "minlon,minlat,maxlon,maxlat" in degrees
impl fmt::Display for LatLonBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = self.min.to_degrees();
        let max = self.max.to_degrees();
        write!(f, "{},{},{},{}", min.lon(), min.lat(), max.lon(), max.lat())
    }
}

/// Bounding coordinates around a point for a search distance
///
/// Holds two corner points (min, max) for a single box, or four when the
/// search circle crosses the 180th meridian and the region is split into
/// two boxes: `[0, 1]` and `[2, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingRegion {
    points: Vec<GeoPoint>,
    radians: bool,
}

impl BoundingRegion {
    /// Create a region from 2 or 4 corner points
    ///
    /// The angle unit is taken from the first point and every other point
    /// is converted to it. Corner ordering is not checked.
    pub fn from_points(points: &[GeoPoint]) -> GeoResult<Self> {
        if points.len() != 2 && points.len() != 4 {
            return Err(GeoError::InvalidRegion(points.len()));
        }

        let radians = points[0].is_radians();
        Ok(BoundingRegion {
            points: points.iter().map(|p| p.to_unit(radians)).collect(),
            radians,
        })
    }

    /// Number of corner points, 2 or 4
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Whether the region is made of two boxes
    pub fn is_split(&self) -> bool {
        self.points.len() == 4
    }

    pub fn is_radians(&self) -> bool {
        self.radians
    }

    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    /// The boxes making up this region, one or two
    pub fn boxes(&self) -> Vec<LatLonBox> {
        self.points
            .chunks(2)
            .map(|pair| LatLonBox { min: pair[0], max: pair[1] })
            .collect()
    }

    /// Check if any box of the region contains a point
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.boxes().iter().any(|b| b.contains(point))
    }

    /// This region with all corners in radians
    pub fn to_radians(&self) -> BoundingRegion {
        if self.radians {
            return self.clone();
        }
        BoundingRegion {
            points: self.points.iter().map(GeoPoint::to_radians).collect(),
            radians: true,
        }
    }

    /// This region with all corners in degrees
    pub fn to_degrees(&self) -> BoundingRegion {
        if !self.radians {
            return self.clone();
        }
        BoundingRegion {
            points: self.points.iter().map(GeoPoint::to_degrees).collect(),
            radians: false,
        }
    }
}

impl Index<usize> for BoundingRegion {
    type Output = GeoPoint;

    fn index(&self, index: usize) -> &GeoPoint {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a BoundingRegion {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for BoundingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points: Vec<String> = self.points.iter().map(|p| p.to_string()).collect();
        write!(f, "BoundingRegion[{}]", points.join(", "))
    }
}
