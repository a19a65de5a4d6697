//! Bit accumulator used while encoding or decoding a hash
//!
//! Bits are pushed most significant first. Even positions refine the
//! longitude range, odd positions the latitude range. The accumulated
//! state is frozen into an immutable `GeoHash` by `build`.

use crate::coordinate::{BoundingBox, WGS84Point};
use crate::geohash::constants::ranges::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::geohash::hash::GeoHash;
use crate::utils::bit_utils::left_justify;

pub(crate) struct HashBuilder {
    /// Right-aligned bits pushed so far
    bits: u64,
    significant_bits: u8,
    latitude_range: [f64; 2],
    longitude_range: [f64; 2],
}

impl HashBuilder {
    pub(crate) fn new() -> Self {
        HashBuilder {
            bits: 0,
            significant_bits: 0,
            latitude_range: [MIN_LAT, MAX_LAT],
            longitude_range: [MIN_LON, MAX_LON],
        }
    }

    fn next_is_longitude(&self) -> bool {
        self.significant_bits % 2 == 0
    }

    /// Append one bit and halve the range of the dimension it belongs to
    pub(crate) fn push_bit(&mut self, on: bool) {
        let range = if self.next_is_longitude() {
            &mut self.longitude_range
        } else {
            &mut self.latitude_range
        };
        let mid = (range[0] + range[1]) / 2.0;
        if on {
            range[0] = mid;
        } else {
            range[1] = mid;
        }

        self.bits <<= 1;
        if on {
            self.bits |= 0x1;
        }
        self.significant_bits += 1;
    }

    /// Append the bit that keeps `(latitude, longitude)` inside the cell
    pub(crate) fn push_coordinate(&mut self, latitude: f64, longitude: f64) {
        let (value, range) = if self.next_is_longitude() {
            (longitude, self.longitude_range)
        } else {
            (latitude, self.latitude_range)
        };
        let mid = (range[0] + range[1]) / 2.0;
        self.push_bit(value >= mid);
    }

    /// Freeze the accumulated bits
    ///
    /// The hash's point is `origin` when the hash was encoded from a
    /// coordinate and the cell center otherwise.
    pub(crate) fn build(self, origin: Option<WGS84Point>) -> GeoHash {
        let bounding_box = BoundingBox::new_unchecked(
            self.latitude_range[0],
            self.latitude_range[1],
            self.longitude_range[0],
            self.longitude_range[1],
        );
        let point = origin.unwrap_or_else(|| bounding_box.center());

        GeoHash {
            bits: left_justify(self.bits, self.significant_bits),
            significant_bits: self.significant_bits,
            point,
            bounding_box,
        }
    }
}
