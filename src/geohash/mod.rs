//! Geohash encoding and decoding module
//!
//! This module provides the geohash value type with its base32, binary and
//! ordinal representations, neighbour arithmetic, and the table of cell
//! sizes per precision.

pub mod errors;
pub(crate) mod constants;
mod builder;
mod hash;
mod neighbors;
pub mod size_table;
pub mod codec;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{GeoHashError, GeoHashResult};
pub use hash::GeoHash;
pub use constants::BASE32;
pub use constants::precision::{MAX_BIT_PRECISION, MAX_CHARACTER_PRECISION};
