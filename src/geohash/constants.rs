//! Geohash format constants
//!
//! Precision limits, the base32 alphabet and the bit masks shared by the
//! encoder, the decoder and the neighbour arithmetic.

use std::collections::HashMap;
use lazy_static::lazy_static;

/// Precision limits
pub mod precision {
    /// Maximum number of significant bits in a hash (one u64 word)
    pub const MAX_BIT_PRECISION: u8 = 64;

    /// Maximum number of base32 characters (12 * 5 = 60 bits)
    pub const MAX_CHARACTER_PRECISION: u8 = 12;

    /// Bits encoded by a single base32 character
    pub const BASE32_BITS: u8 = 5;
}

/// Bit masks on the left-justified hash word
pub mod masks {
    /// Most significant bit of the word
    pub const FIRST_BIT_FLAGGED: u64 = 0x8000_0000_0000_0000;

    /// Top five bits of the word (one base32 character)
    pub const FIRST_FIVE_BITS: u64 = 0xf800_0000_0000_0000;
}

/// Coordinate ranges of the WGS84 grid
pub mod ranges {
    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;
    pub const MIN_LON: f64 = -180.0;
    pub const MAX_LON: f64 = 180.0;
}

/// The geohash base32 alphabet; excludes a, i, l and o
pub const BASE32: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

lazy_static! {
    // Reverse lookup for the alphabet, built once
    static ref DECODE_MAP: HashMap<char, u8> = BASE32
        .iter()
        .enumerate()
        .map(|(index, c)| (*c, index as u8))
        .collect();
}

/// Look up the 5-bit value of a base32 character
pub fn decode_char(c: char) -> Option<u8> {
    DECODE_MAP.get(&c).copied()
}

/// Base32 character for a 5-bit value
pub fn encode_value(value: u8) -> char {
    BASE32[(value & 0x1f) as usize]
}
