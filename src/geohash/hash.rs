//! The geohash value type
//!
//! A hash is a left-justified 64-bit word of which only the top
//! `significant_bits` carry information. Bits alternate between
//! longitude (even positions) and latitude (odd positions), starting with
//! longitude at the most significant bit.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::trace;

use super::builder::HashBuilder;
use super::constants::masks::{FIRST_BIT_FLAGGED, FIRST_FIVE_BITS};
use super::constants::precision::{BASE32_BITS, MAX_BIT_PRECISION, MAX_CHARACTER_PRECISION};
use super::constants::{decode_char, encode_value};
use super::errors::{GeoHashError, GeoHashResult};
use crate::coordinate::{BoundingBox, WGS84Point};
use crate::utils::bit_utils::{common_prefix_length, leading_mask, left_justify, mask_last_n_bits};

/// An immutable geohash cell
///
/// Equality, hashing and ordering only look at the bits and the precision;
/// the attached point and box are derived data.
#[derive(Debug, Clone, Copy)]
pub struct GeoHash {
    pub(super) bits: u64,
    pub(super) significant_bits: u8,
    pub(super) point: WGS84Point,
    pub(super) bounding_box: BoundingBox,
}

impl GeoHash {
    /// Encode a coordinate using the given number of bits (at most 64)
    pub fn with_bit_precision(latitude: f64, longitude: f64, number_of_bits: u8) -> GeoHashResult<GeoHash> {
        let point = WGS84Point::new(latitude, longitude)?;
        GeoHash::from_point(&point, number_of_bits)
    }

    /// Encode a coordinate using the given number of base32 characters (at most 12)
    pub fn with_character_precision(latitude: f64, longitude: f64, number_of_characters: u8) -> GeoHashResult<GeoHash> {
        if number_of_characters > MAX_CHARACTER_PRECISION {
            return Err(GeoHashError::InvalidArgument(format!(
                "A geohash can only be {} characters long, got {}",
                MAX_CHARACTER_PRECISION, number_of_characters
            )));
        }
        GeoHash::with_bit_precision(latitude, longitude, number_of_characters * BASE32_BITS)
    }

    /// Encode an already validated point
    pub fn from_point(point: &WGS84Point, number_of_bits: u8) -> GeoHashResult<GeoHash> {
        check_bit_precision(number_of_bits)?;
        Ok(GeoHash::encode(point, number_of_bits))
    }

    /// Encode without re-checking the precision
    pub(crate) fn encode(point: &WGS84Point, number_of_bits: u8) -> GeoHash {
        let mut builder = HashBuilder::new();
        for _ in 0..number_of_bits.min(MAX_BIT_PRECISION) {
            builder.push_coordinate(point.latitude(), point.longitude());
        }
        builder.build(Some(*point))
    }

    /// Decode a base32 geohash string such as `"u0qj"`
    pub fn from_base32(geohash: &str) -> GeoHashResult<GeoHash> {
        let length = geohash.chars().count();
        if length > MAX_CHARACTER_PRECISION as usize {
            return Err(GeoHashError::InvalidArgument(format!(
                "Geohash '{}' is longer than {} characters",
                geohash, MAX_CHARACTER_PRECISION
            )));
        }

        let mut builder = HashBuilder::new();
        for c in geohash.chars() {
            let value = decode_char(c).ok_or_else(|| {
                GeoHashError::InvalidArgument(format!(
                    "Character '{}' in '{}' is not part of the geohash alphabet",
                    c, geohash
                ))
            })?;
            for shift in (0..BASE32_BITS).rev() {
                builder.push_bit((value >> shift) & 0x1 == 0x1);
            }
        }
        Ok(builder.build(None))
    }

    /// Decode a string of `'0'` and `'1'` characters, most significant bit first
    pub fn from_binary_string(binary: &str) -> GeoHashResult<GeoHash> {
        if binary.len() > MAX_BIT_PRECISION as usize {
            return Err(GeoHashError::InvalidArgument(format!(
                "Binary geohash has more than {} bits",
                MAX_BIT_PRECISION
            )));
        }

        let mut builder = HashBuilder::new();
        for c in binary.chars() {
            match c {
                '0' => builder.push_bit(false),
                '1' => builder.push_bit(true),
                other => {
                    return Err(GeoHashError::InvalidArgument(format!(
                        "Unexpected character '{}' in binary geohash",
                        other
                    )))
                }
            }
        }
        Ok(builder.build(None))
    }

    /// Rebuild a hash from its raw left-justified word
    ///
    /// Bits below the significant ones are ignored.
    pub fn from_long_value(bits: u64, significant_bits: u8) -> GeoHashResult<GeoHash> {
        check_bit_precision(significant_bits)?;
        Ok(GeoHash::replay(bits, significant_bits))
    }

    /// Rebuild a hash from its ordinal within the given precision
    pub fn from_ord(ord: u64, significant_bits: u8) -> GeoHashResult<GeoHash> {
        check_bit_precision(significant_bits)?;
        Ok(GeoHash::replay(left_justify(ord, significant_bits), significant_bits))
    }

    pub(crate) fn replay(bits: u64, significant_bits: u8) -> GeoHash {
        let mut builder = HashBuilder::new();
        for i in 0..significant_bits.min(MAX_BIT_PRECISION) {
            builder.push_bit(bits & (FIRST_BIT_FLAGGED >> i) != 0);
        }
        builder.build(None)
    }

    /// Base32 representation; requires a multiple of 5 significant bits
    pub fn to_base32(&self) -> GeoHashResult<String> {
        let characters = self.character_precision()?;

        let mut result = String::with_capacity(characters as usize);
        let mut word = self.bits;
        for _ in 0..characters {
            let value = ((word & FIRST_FIVE_BITS) >> (MAX_BIT_PRECISION - BASE32_BITS)) as u8;
            result.push(encode_value(value));
            word <<= BASE32_BITS;
        }
        Ok(result)
    }

    /// Number of base32 characters; requires a multiple of 5 significant bits
    pub fn character_precision(&self) -> GeoHashResult<u8> {
        if self.significant_bits % BASE32_BITS != 0 {
            return Err(GeoHashError::IllegalState(format!(
                "Cannot convert a geohash of {} bits to base32; the precision must be a multiple of {}",
                self.significant_bits, BASE32_BITS
            )));
        }
        Ok(self.significant_bits / BASE32_BITS)
    }

    /// One `'0'` or `'1'` per significant bit
    pub fn to_binary_string(&self) -> String {
        (0..self.significant_bits)
            .map(|i| if self.bits & (FIRST_BIT_FLAGGED >> i) != 0 { '1' } else { '0' })
            .collect()
    }

    /// Position of this cell along the Z-order curve at its precision
    pub fn ord(&self) -> u64 {
        if self.significant_bits == 0 {
            0
        } else {
            self.bits >> (MAX_BIT_PRECISION - self.significant_bits)
        }
    }

    /// The next cell in Z-order at the same precision
    pub fn next(&self) -> GeoHash {
        self.next_by(1)
    }

    /// The previous cell in Z-order at the same precision
    pub fn prev(&self) -> GeoHash {
        self.next_by(-1)
    }

    /// Move `step` cells along the Z-order curve, wrapping around at the ends
    pub fn next_by(&self, step: i64) -> GeoHash {
        let ord = mask_last_n_bits(self.ord().wrapping_add(step as u64), self.significant_bits);
        GeoHash::replay(left_justify(ord, self.significant_bits), self.significant_bits)
    }

    /// Number of Z-order steps from `from` to `to`
    pub fn steps_between(from: &GeoHash, to: &GeoHash) -> GeoHashResult<i64> {
        if from.significant_bits != to.significant_bits {
            return Err(GeoHashError::PrecisionMismatch(from.significant_bits, to.significant_bits));
        }
        Ok(to.ord().wrapping_sub(from.ord()) as i64)
    }

    /// Whether this hash lies inside the (coarser) cell `parent`
    pub fn within(&self, parent: &GeoHash) -> bool {
        self.bits & leading_mask(parent.significant_bits) == parent.bits
    }

    /// Whether the cell contains the point
    pub fn contains(&self, point: &WGS84Point) -> bool {
        self.bounding_box.contains(point)
    }

    /// The finest cell containing both hashes
    pub fn common_parent(&self, other: &GeoHash) -> GeoHash {
        let shared = common_prefix_length(self.bits, other.bits)
            .min(self.significant_bits)
            .min(other.significant_bits);
        trace!("Common parent of {} and {} has {} bits", self, other, shared);
        GeoHash::replay(self.bits & leading_mask(shared), shared)
    }

    /// The raw left-justified word
    pub fn long_value(&self) -> u64 {
        self.bits
    }

    pub fn significant_bits(&self) -> u8 {
        self.significant_bits
    }

    /// The encoded point, or the cell center for decoded hashes
    pub fn point(&self) -> WGS84Point {
        self.point
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn bounding_box_center(&self) -> WGS84Point {
        self.bounding_box.center()
    }
}

fn check_bit_precision(number_of_bits: u8) -> GeoHashResult<()> {
    if number_of_bits > MAX_BIT_PRECISION {
        return Err(GeoHashError::InvalidArgument(format!(
            "A geohash can only be {} bits long, got {}",
            MAX_BIT_PRECISION, number_of_bits
        )));
    }
    Ok(())
}

impl PartialEq for GeoHash {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.significant_bits == other.significant_bits
    }
}

impl Eq for GeoHash {}

impl Hash for GeoHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
        self.significant_bits.hash(state);
    }
}

impl Ord for GeoHash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits
            .cmp(&other.bits)
            .then(self.significant_bits.cmp(&other.significant_bits))
    }
}

impl PartialOrd for GeoHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_base32() {
            Ok(base32) => write!(f, "{}", base32),
            Err(_) => write!(f, "{}", self.to_binary_string()),
        }
    }
}
