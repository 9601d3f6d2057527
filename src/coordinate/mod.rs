//! Coordinate handling for great-circle radius queries
//!
//! This module provides the angle helpers, the geographic point type and
//! the bounding region computed around a point for a search distance.

pub mod angle;
mod lonlat;
mod point;
mod bounds;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::lonlat::{LonLat, LonLatPair};
pub use self::point::GeoPoint;
pub use self::bounds::{BoundingRegion, LatLonBox};
