//! Coordinate handling for WGS84 data
//!
//! This module provides the point and bounding box types the geohash grid
//! is defined on, together with geodesic computations on the ellipsoid.

mod bbox;
mod point;
mod geodesy;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::{is_valid_latitude, is_valid_longitude, WGS84Point};
pub use self::geodesy::VincentyGeodesy;
