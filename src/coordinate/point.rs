//! Point structure for representing WGS84 coordinates

use std::fmt;

use crate::geohash::constants::ranges::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::geohash::errors::{GeoHashError, GeoHashResult};

/// A point on the WGS84 ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WGS84Point {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl WGS84Point {
    /// Create a new point, rejecting coordinates outside the WGS84 ranges
    pub fn new(latitude: f64, longitude: f64) -> GeoHashResult<Self> {
        if !is_valid_latitude(latitude) || !is_valid_longitude(longitude) {
            return Err(GeoHashError::InvalidArgument(format!(
                "The supplied coordinates ({},{}) are out of range",
                latitude, longitude
            )));
        }
        Ok(WGS84Point { latitude, longitude })
    }

    /// Build a point from values already known to be in range
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        WGS84Point { latitude, longitude }
    }

    /// Parse a point from a string (format: "lat,lon")
    pub fn from_string(point_str: &str) -> GeoHashResult<Self> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoHashError::InvalidArgument(
                "Point must be in format 'lat,lon'".to_string(),
            ));
        }

        let latitude = parts[0].trim().parse::<f64>()
            .map_err(|_| GeoHashError::InvalidArgument(format!("Invalid latitude value: {}", parts[0])))?;
        let longitude = parts[1].trim().parse::<f64>()
            .map_err(|_| GeoHashError::InvalidArgument(format!("Invalid longitude value: {}", parts[1])))?;

        WGS84Point::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for WGS84Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.latitude, self.longitude)
    }
}

/// Check that a latitude lies within [-90, 90]
pub fn is_valid_latitude(latitude: f64) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&latitude)
}

/// Check that a longitude lies within [-180, 180]
pub fn is_valid_longitude(longitude: f64) -> bool {
    (MIN_LON..=MAX_LON).contains(&longitude)
}
