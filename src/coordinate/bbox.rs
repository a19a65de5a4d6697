//! Bounding box structure for defining WGS84 regions
//!
//! A box may cross the 180° meridian: when its east edge lies west of its
//! west edge it spans `west..180` and `-180..east`.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::point::{is_valid_latitude, is_valid_longitude, WGS84Point};
use crate::geohash::constants::ranges::{MAX_LON, MIN_LON};
use crate::geohash::errors::{GeoHashError, GeoHashResult};

lazy_static! {
    // BOX(minLon minLat,maxLon maxLat)
    static ref WKT_BOX: Regex = Regex::new(
        r"^\s*BOX\s*\(\s*([^\s,()]+)\s+([^\s,()]+)\s*,\s*([^\s,()]+)\s+([^\s,()]+)\s*\)\s*$"
    ).expect("WKT box pattern is valid");
}

/// A WGS84 bounding box that is aware of the 180° meridian
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern edge latitude
    south_lat: f64,
    /// Northern edge latitude
    north_lat: f64,
    /// Western edge longitude
    west_lon: f64,
    /// Eastern edge longitude
    east_lon: f64,
    /// True when east_lon < west_lon
    crosses_seam: bool,
}

impl BoundingBox {
    /// Create a new bounding box from its four edges
    ///
    /// A west edge greater than the east edge describes a box crossing the
    /// 180° meridian. The southern edge must not lie north of the northern one.
    pub fn new(south_lat: f64, north_lat: f64, west_lon: f64, east_lon: f64) -> GeoHashResult<Self> {
        if south_lat > north_lat {
            return Err(GeoHashError::InvalidArgument(format!(
                "The south latitude {} must not be greater than the north latitude {}",
                south_lat, north_lat
            )));
        }
        if !is_valid_latitude(south_lat) || !is_valid_latitude(north_lat) {
            return Err(GeoHashError::InvalidArgument(format!(
                "Latitudes {} / {} are out of range (-90,90)",
                south_lat, north_lat
            )));
        }
        if !is_valid_longitude(west_lon) || !is_valid_longitude(east_lon) {
            return Err(GeoHashError::InvalidArgument(format!(
                "Longitudes {} / {} are out of range (-180,180)",
                west_lon, east_lon
            )));
        }

        Ok(Self::new_unchecked(south_lat, north_lat, west_lon, east_lon))
    }

    /// Build a box from edges already known to be valid
    pub(crate) fn new_unchecked(south_lat: f64, north_lat: f64, west_lon: f64, east_lon: f64) -> Self {
        BoundingBox {
            south_lat,
            north_lat,
            west_lon,
            east_lon,
            crosses_seam: east_lon < west_lon,
        }
    }

    /// Create the box spanned by two arbitrary corners
    ///
    /// The corners are ordered, so the resulting box never crosses the
    /// 180° meridian and swapping the corners yields the same box.
    pub fn from_corners(a: &WGS84Point, b: &WGS84Point) -> Self {
        Self::new_unchecked(
            a.latitude().min(b.latitude()),
            a.latitude().max(b.latitude()),
            a.longitude().min(b.longitude()),
            a.longitude().max(b.longitude()),
        )
    }

    /// Create a box from its south-west and north-east corners
    ///
    /// A north-east corner west of the south-west corner yields a box
    /// crossing the 180° meridian.
    pub fn from_south_west_north_east(south_west: &WGS84Point, north_east: &WGS84Point) -> GeoHashResult<Self> {
        Self::new(
            south_west.latitude(),
            north_east.latitude(),
            south_west.longitude(),
            north_east.longitude(),
        )
    }

    /// Parse a bounding box from a string (format: "south,north,west,east")
    pub fn from_string(bbox_str: &str) -> GeoHashResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeoHashError::InvalidArgument(
                "Bounding box must have 4 comma-separated values".to_string(),
            ));
        }

        let south = parse_degrees(parts[0], "south")?;
        let north = parse_degrees(parts[1], "north")?;
        let west = parse_degrees(parts[2], "west")?;
        let east = parse_degrees(parts[3], "east")?;

        BoundingBox::new(south, north, west, east)
    }

    /// Parse a WKT-style box: `BOX(minLon minLat,maxLon maxLat)`
    pub fn from_wkt(wkt: &str) -> GeoHashResult<Self> {
        let captures = WKT_BOX.captures(wkt).ok_or_else(|| {
            GeoHashError::InvalidArgument(format!("Not a WKT box: {}", wkt))
        })?;

        let west = parse_degrees(&captures[1], "west")?;
        let south = parse_degrees(&captures[2], "south")?;
        let east = parse_degrees(&captures[3], "east")?;
        let north = parse_degrees(&captures[4], "north")?;

        BoundingBox::new(south, north, west, east)
    }

    pub fn south_latitude(&self) -> f64 {
        self.south_lat
    }

    pub fn north_latitude(&self) -> f64 {
        self.north_lat
    }

    pub fn west_longitude(&self) -> f64 {
        self.west_lon
    }

    pub fn east_longitude(&self) -> f64 {
        self.east_lon
    }

    /// Whether the box spans the 180° meridian
    pub fn crosses_seam(&self) -> bool {
        self.crosses_seam
    }

    pub fn north_west_corner(&self) -> WGS84Point {
        WGS84Point::new_unchecked(self.north_lat, self.west_lon)
    }

    pub fn north_east_corner(&self) -> WGS84Point {
        WGS84Point::new_unchecked(self.north_lat, self.east_lon)
    }

    pub fn south_east_corner(&self) -> WGS84Point {
        WGS84Point::new_unchecked(self.south_lat, self.east_lon)
    }

    pub fn south_west_corner(&self) -> WGS84Point {
        WGS84Point::new_unchecked(self.south_lat, self.west_lon)
    }

    /// Height of the box in degrees
    pub fn latitude_size(&self) -> f64 {
        self.north_lat - self.south_lat
    }

    /// Width of the box in degrees, measured eastwards across the seam
    pub fn longitude_size(&self) -> f64 {
        if self.crosses_seam {
            (MAX_LON - self.west_lon) + (self.east_lon - MIN_LON)
        } else {
            self.east_lon - self.west_lon
        }
    }

    /// Center point of the box
    pub fn center(&self) -> WGS84Point {
        let center_lat = (self.south_lat + self.north_lat) / 2.0;
        let mut center_lon = (self.west_lon + self.east_lon) / 2.0;
        if self.crosses_seam {
            center_lon += MAX_LON;
            if center_lon > MAX_LON {
                center_lon -= 360.0;
            }
        }
        WGS84Point::new_unchecked(center_lat, center_lon)
    }

    /// Check if this bounding box contains a point (edges inclusive)
    pub fn contains(&self, point: &WGS84Point) -> bool {
        self.contains_latitude(point.latitude()) && self.contains_longitude(point.longitude())
    }

    fn contains_latitude(&self, latitude: f64) -> bool {
        latitude >= self.south_lat && latitude <= self.north_lat
    }

    fn contains_longitude(&self, longitude: f64) -> bool {
        if self.crosses_seam {
            longitude >= self.west_lon || longitude <= self.east_lon
        } else {
            longitude >= self.west_lon && longitude <= self.east_lon
        }
    }

    /// Check if two boxes overlap (touching edges count)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        if other.south_lat > self.north_lat || other.north_lat < self.south_lat {
            return false;
        }

        match (self.crosses_seam, other.crosses_seam) {
            (false, false) => !(other.west_lon > self.east_lon || other.east_lon < self.west_lon),
            (true, false) => other.east_lon >= self.west_lon || other.west_lon <= self.east_lon,
            (false, true) => self.east_lon >= other.west_lon || self.west_lon <= other.east_lon,
            // both contain the seam itself
            (true, true) => true,
        }
    }

    /// Grow the box so that it contains the given point
    ///
    /// Longitude grows in whichever direction is shorter, eastwards on ties.
    pub fn expand_to_include_point(&mut self, point: &WGS84Point) {
        let other = BoundingBox::new_unchecked(
            point.latitude(),
            point.latitude(),
            point.longitude(),
            point.longitude(),
        );
        self.expand_to_include(&other);
    }

    /// Grow the box so that it contains the other box
    ///
    /// Longitude grows in whichever direction is shorter, eastwards on ties.
    /// When no box narrower than 360° holds both, the result spans the full
    /// globe.
    pub fn expand_to_include(&mut self, other: &BoundingBox) {
        self.south_lat = self.south_lat.min(other.south_lat);
        self.north_lat = self.north_lat.max(other.north_lat);

        let own_width = self.longitude_size();
        let other_width = other.longitude_size();

        // offsets are taken modulo 360 so that -180 and 180 coincide
        let east_offset = (other.west_lon - self.west_lon).rem_euclid(360.0);
        let west_offset = (self.west_lon - other.west_lon).rem_euclid(360.0);
        // keep our west edge, or take over the other's west edge
        let grown_east = own_width.max(east_offset + other_width);
        let grown_west = other_width.max(west_offset + own_width);

        let (west_lon, east_lon, width) = if grown_east <= grown_west {
            let east_lon = if grown_east == own_width { self.east_lon } else { other.east_lon };
            (self.west_lon, east_lon, grown_east)
        } else {
            let east_lon = if grown_west == other_width { other.east_lon } else { self.east_lon };
            (other.west_lon, east_lon, grown_west)
        };

        if width >= 360.0 {
            self.west_lon = MIN_LON;
            self.east_lon = MAX_LON;
            self.crosses_seam = false;
            return;
        }

        self.west_lon = west_lon;
        self.east_lon = east_lon;
        self.crosses_seam = east_lon < west_lon;
    }

    /// WKT-style representation: `BOX(minLon minLat,maxLon maxLat)`
    pub fn to_wkt(&self) -> String {
        format!(
            "BOX({} {},{} {})",
            self.west_lon, self.south_lat, self.east_lon, self.north_lat
        )
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.north_west_corner(), self.south_east_corner())
    }
}

fn parse_degrees(value: &str, edge: &str) -> GeoHashResult<f64> {
    value.trim().parse::<f64>()
        .map_err(|_| GeoHashError::InvalidArgument(format!("Invalid {} value: {}", edge, value)))
}
