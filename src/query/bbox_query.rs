//! Covering cells for a rectangle
//!
//! The rectangle is matched against the coarsest precision whose cells are
//! at least as large as the rectangle. One such cell, or the cell at the
//! center plus those of its neighbours that touch the rectangle, covers it.
//! Rectangles crossing the 180° meridian are handled as two halves.

use std::fmt;

use log::{debug, trace};

use super::query_traits::GeoHashQuery;
use crate::coordinate::{BoundingBox, WGS84Point};
use crate::geohash::constants::precision::MAX_BIT_PRECISION;
use crate::geohash::constants::ranges::{MAX_LON, MIN_LON};
use crate::geohash::size_table::number_of_bits_for_overlapping_geohash;
use crate::geohash::GeoHash;

/// At most nine cells per half rectangle
const MAX_CELLS_PER_SEARCH: usize = 9;

/// Cells covering a rectangle
#[derive(Debug, Clone)]
pub struct GeoHashBoundingBoxQuery {
    search_hashes: Vec<GeoHash>,
    bounding_box: BoundingBox,
}

impl GeoHashBoundingBoxQuery {
    pub fn new(bbox: &BoundingBox) -> Self {
        let mut search_hashes = Vec::with_capacity(2 * MAX_CELLS_PER_SEARCH);

        if bbox.crosses_seam() {
            debug!("Splitting {} at the 180° meridian", bbox);
            let east_part = BoundingBox::new_unchecked(
                bbox.south_latitude(),
                bbox.north_latitude(),
                bbox.west_longitude(),
                MAX_LON,
            );
            let west_part = BoundingBox::new_unchecked(
                bbox.south_latitude(),
                bbox.north_latitude(),
                MIN_LON,
                bbox.east_longitude(),
            );
            generate_search_hashes(&east_part, &mut search_hashes);
            generate_search_hashes(&west_part, &mut search_hashes);
        } else {
            generate_search_hashes(bbox, &mut search_hashes);
        }

        let search_hashes = remove_redundant_hashes(search_hashes);

        let mut bounding_box = search_hashes[0].bounding_box();
        for hash in search_hashes.iter().skip(1) {
            bounding_box.expand_to_include(&hash.bounding_box());
        }
        debug!("Query {} is covered by {} cells", bbox, search_hashes.len());

        GeoHashBoundingBoxQuery {
            search_hashes,
            bounding_box,
        }
    }

    /// Union of the covering cells
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }
}

fn generate_search_hashes(bbox: &BoundingBox, search_hashes: &mut Vec<GeoHash>) {
    let fitting_bits = number_of_bits_for_overlapping_geohash(bbox);
    let center_hash = GeoHash::encode(&bbox.center(), fitting_bits);
    debug!("Searching {} with {}-bit cells around {}", bbox, fitting_bits, center_hash);

    search_hashes.push(center_hash);
    if hash_contains_bounding_box(&center_hash, bbox) {
        return;
    }

    for adjacent in center_hash.adjacent() {
        if adjacent.bounding_box().intersects(bbox) && !search_hashes.contains(&adjacent) {
            trace!("Adding neighbour {}", adjacent);
            search_hashes.push(adjacent);
        }
    }
}

fn hash_contains_bounding_box(hash: &GeoHash, bbox: &BoundingBox) -> bool {
    hash.contains(&bbox.north_west_corner()) && hash.contains(&bbox.south_east_corner())
}

/// Collapse to the globe cell if present and drop cells lying inside a
/// coarser cell of the set
fn remove_redundant_hashes(search_hashes: Vec<GeoHash>) -> Vec<GeoHash> {
    if let Some(globe) = search_hashes.iter().find(|hash| hash.significant_bits() == 0) {
        debug!("Query covers the whole globe");
        return vec![*globe];
    }

    let retained: Vec<GeoHash> = search_hashes
        .iter()
        .filter(|hash| {
            !search_hashes.iter().any(|coarser| {
                coarser.significant_bits() < hash.significant_bits() && hash.within(coarser)
            })
        })
        .copied()
        .collect();

    if retained.len() < search_hashes.len() {
        debug!("Removed {} duplicate cells", search_hashes.len() - retained.len());
    }
    retained
}

impl GeoHashQuery for GeoHashBoundingBoxQuery {
    fn contains(&self, hash: &GeoHash) -> bool {
        self.search_hashes.iter().any(|search_hash| hash.within(search_hash))
    }

    fn contains_point(&self, point: &WGS84Point) -> bool {
        self.contains(&GeoHash::encode(point, MAX_BIT_PRECISION))
    }

    fn search_hashes(&self) -> &[GeoHash] {
        &self.search_hashes
    }

    fn wkt_box(&self) -> String {
        self.bounding_box.to_wkt()
    }
}

impl fmt::Display for GeoHashBoundingBoxQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hash in &self.search_hashes {
            writeln!(f, "{}", hash)?;
        }
        Ok(())
    }
}
