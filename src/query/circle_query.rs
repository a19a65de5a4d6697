//! Circle search approximated by the enclosing rectangle
//!
//! The rectangle's corners are found by walking the radius north then east
//! and south then west from the center on the WGS84 ellipsoid.

use std::fmt;

use super::bbox_query::GeoHashBoundingBoxQuery;
use super::query_traits::GeoHashQuery;
use crate::coordinate::{BoundingBox, VincentyGeodesy, WGS84Point};
use crate::geohash::{GeoHash, GeoHashError, GeoHashResult};

/// Cells covering a circle given by a center and a radius in meters
#[derive(Debug, Clone)]
pub struct GeoHashCircleQuery {
    center: WGS84Point,
    radius: f64,
    query: GeoHashBoundingBoxQuery,
}

impl GeoHashCircleQuery {
    pub fn new(center: &WGS84Point, radius: f64) -> GeoHashResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeoHashError::InvalidArgument(format!(
                "Radius must be a non-negative distance in meters, got {}",
                radius
            )));
        }

        let north = VincentyGeodesy::move_in_direction(center, 0.0, radius)?;
        let north_east = VincentyGeodesy::move_in_direction(&north, 90.0, radius)?;
        let south = VincentyGeodesy::move_in_direction(center, 180.0, radius)?;
        let south_west = VincentyGeodesy::move_in_direction(&south, 270.0, radius)?;

        // longitudes keep their sides so that circles around the seam cross it
        let bbox = BoundingBox::new(
            south_west.latitude().min(north_east.latitude()),
            south_west.latitude().max(north_east.latitude()),
            south_west.longitude(),
            north_east.longitude(),
        )?;

        Ok(GeoHashCircleQuery {
            center: *center,
            radius,
            query: GeoHashBoundingBoxQuery::new(&bbox),
        })
    }

    pub fn center(&self) -> WGS84Point {
        self.center
    }

    /// Radius in meters
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn radius_string(&self) -> String {
        if self.radius > 1000.0 {
            format!("{}km", self.radius / 1000.0)
        } else {
            format!("{}m", self.radius)
        }
    }
}

impl GeoHashQuery for GeoHashCircleQuery {
    fn contains(&self, hash: &GeoHash) -> bool {
        self.query.contains(hash)
    }

    fn contains_point(&self, point: &WGS84Point) -> bool {
        self.query.contains_point(point)
    }

    fn search_hashes(&self) -> &[GeoHash] {
        self.query.search_hashes()
    }

    fn wkt_box(&self) -> String {
        self.query.wkt_box()
    }
}

impl fmt::Display for GeoHashCircleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle Query [center={}, radius={}]", self.center, self.radius_string())
    }
}
