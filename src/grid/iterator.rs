//! Enumeration of every cell inside a two-hash box
//!
//! The walk follows the Z-order curve from the bottom-left to the top-right
//! cell and skips the cells whose center falls outside the box. It ends at
//! the top-right ordinal and therefore never wraps around.

use log::debug;

use super::two_hash_bbox::TwoGeoHashBoundingBox;
use crate::coordinate::BoundingBox;
use crate::geohash::{GeoHash, GeoHashResult};

/// Iterator over the cells of a `TwoGeoHashBoundingBox` in ordinal order
pub struct BoundingBoxGeoHashIterator {
    bounding_box: TwoGeoHashBoundingBox,
    current: Option<GeoHash>,
}

impl BoundingBoxGeoHashIterator {
    pub fn new(bounding_box: TwoGeoHashBoundingBox) -> Self {
        debug!(
            "Iterating cells from {} to {}",
            bounding_box.bottom_left(),
            bounding_box.top_right()
        );
        BoundingBoxGeoHashIterator {
            current: Some(bounding_box.bottom_left()),
            bounding_box,
        }
    }

    pub fn with_bit_precision(bbox: &BoundingBox, number_of_bits: u8) -> GeoHashResult<Self> {
        Ok(Self::new(TwoGeoHashBoundingBox::with_bit_precision(bbox, number_of_bits)?))
    }

    pub fn with_character_precision(bbox: &BoundingBox, number_of_characters: u8) -> GeoHashResult<Self> {
        Ok(Self::new(TwoGeoHashBoundingBox::with_character_precision(bbox, number_of_characters)?))
    }

    pub fn bounding_box(&self) -> &TwoGeoHashBoundingBox {
        &self.bounding_box
    }

    /// Upper bound on the number of cells still to be visited
    pub fn remaining_steps(&self) -> u64 {
        match self.current {
            Some(current) => self.bounding_box.top_right().ord().saturating_sub(current.ord()) + 1,
            None => 0,
        }
    }

    fn advance(&self, from: &GeoHash) -> Option<GeoHash> {
        let last = self.bounding_box.top_right().ord();
        let area = self.bounding_box.bounding_box();

        let mut candidate = *from;
        while candidate.ord() < last {
            candidate = candidate.next();
            if area.contains(&candidate.point()) {
                return Some(candidate);
            }
        }
        None
    }
}

impl Iterator for BoundingBoxGeoHashIterator {
    type Item = GeoHash;

    fn next(&mut self) -> Option<GeoHash> {
        let current = self.current?;
        self.current = self.advance(&current);
        Some(current)
    }
}
