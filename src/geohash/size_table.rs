//! Cell dimensions per bit precision
//!
//! A hash of `b` bits spans `b / 2` latitude halvings and `(b + 1) / 2`
//! longitude halvings, so its cell measures
//! `180 / 2^(b/2)` by `360 / 2^((b+1)/2)` degrees.

use lazy_static::lazy_static;
use log::trace;

use super::constants::precision::MAX_BIT_PRECISION;
use crate::coordinate::BoundingBox;

const TABLE_SIZE: usize = MAX_BIT_PRECISION as usize + 1;

lazy_static! {
    static ref D_LAT: [f64; TABLE_SIZE] = {
        let mut table = [0.0; TABLE_SIZE];
        for (bits, entry) in table.iter_mut().enumerate() {
            *entry = 180.0 / 2f64.powi((bits / 2) as i32);
        }
        table
    };
    static ref D_LON: [f64; TABLE_SIZE] = {
        let mut table = [0.0; TABLE_SIZE];
        for (bits, entry) in table.iter_mut().enumerate() {
            *entry = 360.0 / 2f64.powi(((bits + 1) / 2) as i32);
        }
        table
    };
}

/// Cell height in degrees for a hash of `bits` bits
pub fn d_lat(bits: u8) -> f64 {
    D_LAT[bits.min(MAX_BIT_PRECISION) as usize]
}

/// Cell width in degrees for a hash of `bits` bits
pub fn d_lon(bits: u8) -> f64 {
    D_LON[bits.min(MAX_BIT_PRECISION) as usize]
}

/// The largest precision below 64 bits whose cells are at least as large
/// as the box in both dimensions, 0 if none is
pub fn number_of_bits_for_overlapping_geohash(bbox: &BoundingBox) -> u8 {
    let height = bbox.latitude_size();
    let width = bbox.longitude_size();

    let mut bits = MAX_BIT_PRECISION - 1;
    while (d_lat(bits) < height || d_lon(bits) < width) && bits > 0 {
        bits -= 1;
    }
    trace!("Box of {}x{} degrees fits into {}-bit cells", height, width, bits);
    bits
}
