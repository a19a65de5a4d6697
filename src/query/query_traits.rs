use crate::coordinate::WGS84Point;
use crate::geohash::GeoHash;

/// A set of cells covering a search region
pub trait GeoHashQuery {
    /// Whether the hash lies inside one of the covering cells
    fn contains(&self, hash: &GeoHash) -> bool;

    /// Whether the point lies inside one of the covering cells
    fn contains_point(&self, point: &WGS84Point) -> bool;

    /// The covering cells
    fn search_hashes(&self) -> &[GeoHash];

    /// Union of the covering cells as `BOX(minLon minLat,maxLon maxLat)`
    fn wkt_box(&self) -> String;
}
