//! # geobounds
//!
//! Bounding latitude/longitude coordinates for "find points within a
//! distance" queries. Instead of computing the great-circle distance to
//! every candidate, filter candidates with the cheap coordinate-range test
//! of a [`BoundingRegion`] and only check the exact distance for the ones
//! that pass.
//!
//! ```rust
//! use geobounds::{GeoPoint, EARTH_RADIUS_KM};
//!
//! let somosomo = GeoPoint::from_degrees_with_radius(179.957993, -16.7731, EARTH_RADIUS_KM)?;
//! let region = somosomo.bounding_coordinates(50.0)?;
//!
//! // The search circle crosses the 180th meridian, so there are two boxes
//! assert_eq!(region.size(), 4);
//! assert_eq!(region.boxes().len(), 2);
//! # Ok::<(), geobounds::GeoError>(())
//! ```

pub mod errors;
pub mod config;
pub mod coordinate;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoBounds;

pub use errors::{GeoError, GeoResult};
pub use config::{DistanceUnit, RadiusConfig, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use coordinate::{BoundingRegion, GeoPoint, LatLonBox, LonLat, LonLatPair};
