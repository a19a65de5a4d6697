//! A rectangle described by its south-west and north-east cells

use crate::coordinate::BoundingBox;
use crate::geohash::constants::ranges::{MAX_LON, MIN_LON};
use crate::geohash::{GeoHash, GeoHashError, GeoHashResult};

/// Two hashes of equal precision spanning a grid-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoGeoHashBoundingBox {
    bounding_box: BoundingBox,
    bottom_left: GeoHash,
    top_right: GeoHash,
}

impl TwoGeoHashBoundingBox {
    /// Pair two hashes; both must have the same precision
    pub fn new(bottom_left: &GeoHash, top_right: &GeoHash) -> GeoHashResult<Self> {
        if bottom_left.significant_bits() != top_right.significant_bits() {
            return Err(GeoHashError::PrecisionMismatch(
                bottom_left.significant_bits(),
                top_right.significant_bits(),
            ));
        }

        // decoded copies carry the cell centers as their points
        let bottom_left = GeoHash::replay(bottom_left.long_value(), bottom_left.significant_bits());
        let top_right = GeoHash::replay(top_right.long_value(), top_right.significant_bits());

        let bounding_box = span_cells(&bottom_left.bounding_box(), &top_right.bounding_box());

        Ok(TwoGeoHashBoundingBox {
            bounding_box,
            bottom_left,
            top_right,
        })
    }

    /// Cover `bbox` with the cells of its corners at the given bit precision
    pub fn with_bit_precision(bbox: &BoundingBox, number_of_bits: u8) -> GeoHashResult<Self> {
        let bottom_left = GeoHash::from_point(&bbox.south_west_corner(), number_of_bits)?;
        let top_right = GeoHash::from_point(&bbox.north_east_corner(), number_of_bits)?;
        TwoGeoHashBoundingBox::new(&bottom_left, &top_right)
    }

    /// Cover `bbox` with the cells of its corners at the given character precision
    pub fn with_character_precision(bbox: &BoundingBox, number_of_characters: u8) -> GeoHashResult<Self> {
        let south_west = bbox.south_west_corner();
        let north_east = bbox.north_east_corner();
        let bottom_left = GeoHash::with_character_precision(
            south_west.latitude(),
            south_west.longitude(),
            number_of_characters,
        )?;
        let top_right = GeoHash::with_character_precision(
            north_east.latitude(),
            north_east.longitude(),
            number_of_characters,
        )?;
        TwoGeoHashBoundingBox::new(&bottom_left, &top_right)
    }

    /// Parse the concatenation of two equally long base32 hashes
    pub fn from_base32(base32: &str) -> GeoHashResult<Self> {
        if !base32.is_ascii() || base32.len() % 2 != 0 {
            return Err(GeoHashError::InvalidArgument(format!(
                "'{}' is not made of two equally long geohashes",
                base32
            )));
        }
        let (bottom_left, top_right) = base32.split_at(base32.len() / 2);
        TwoGeoHashBoundingBox::new(&GeoHash::from_base32(bottom_left)?, &GeoHash::from_base32(top_right)?)
    }

    pub fn to_base32(&self) -> GeoHashResult<String> {
        Ok(format!("{}{}", self.bottom_left.to_base32()?, self.top_right.to_base32()?))
    }

    /// From the south-west corner of the bottom-left cell to the
    /// north-east corner of the top-right cell
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn bottom_left(&self) -> GeoHash {
        self.bottom_left
    }

    pub fn top_right(&self) -> GeoHash {
        self.top_right
    }
}

/// Box from the south-west corner of one cell to the north-east corner of
/// the other
///
/// Latitudes take the union of both cells. Longitudes run east from the
/// first cell's west edge; when that span cannot hold both cells the box
/// wraps the whole globe.
fn span_cells(bottom_left: &BoundingBox, top_right: &BoundingBox) -> BoundingBox {
    let south = bottom_left.south_latitude().min(top_right.south_latitude());
    let north = bottom_left.north_latitude().max(top_right.north_latitude());
    let west = bottom_left.west_longitude();
    let east = top_right.east_longitude();

    let width = (east - west).rem_euclid(360.0);
    let top_right_offset = (top_right.west_longitude() - west).rem_euclid(360.0);
    let holds_both = width >= bottom_left.longitude_size()
        && top_right_offset + top_right.longitude_size() <= width;

    if holds_both {
        BoundingBox::new_unchecked(south, north, west, east)
    } else {
        BoundingBox::new_unchecked(south, north, MIN_LON, MAX_LON)
    }
}
