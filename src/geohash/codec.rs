//! Fixed-size binary encoding of a geohash
//!
//! Layout: the 64-bit word in big-endian order followed by one byte with
//! the number of significant bits.

use std::io::{Cursor, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::errors::GeoHashResult;
use super::hash::GeoHash;

/// Size of an encoded hash in bytes
pub const ENCODED_LENGTH: usize = 9;

impl GeoHash {
    /// Write the binary form to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> GeoHashResult<()> {
        writer.write_u64::<BigEndian>(self.bits)?;
        writer.write_u8(self.significant_bits)?;
        Ok(())
    }

    /// Read a hash previously written with `write_to`
    pub fn read_from<R: Read>(reader: &mut R) -> GeoHashResult<GeoHash> {
        let bits = reader.read_u64::<BigEndian>()?;
        let significant_bits = reader.read_u8()?;
        GeoHash::from_long_value(bits, significant_bits)
    }

    pub fn to_bytes(&self) -> [u8; ENCODED_LENGTH] {
        let mut bytes = [0u8; ENCODED_LENGTH];
        bytes[..8].copy_from_slice(&self.bits.to_be_bytes());
        bytes[8] = self.significant_bits;
        bytes
    }

    /// Decode a hash from the first nine bytes of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> GeoHashResult<GeoHash> {
        GeoHash::read_from(&mut Cursor::new(bytes))
    }
}
