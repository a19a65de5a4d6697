//! Bit manipulation utilities
//!
//! Helpers for working on left-justified 64-bit hash words: prefix
//! comparison, de-interleaving and masking.

use crate::geohash::constants::masks::FIRST_BIT_FLAGGED;
use crate::geohash::constants::precision::MAX_BIT_PRECISION;

/// Number of leading bits two words have in common (64 when equal)
pub fn common_prefix_length(a: u64, b: u64) -> u8 {
    (a ^ b).leading_zeros() as u8
}

/// Mask selecting the top `n` bits of a word
pub fn leading_mask(n: u8) -> u64 {
    if n == 0 {
        0
    } else {
        !0u64 << (MAX_BIT_PRECISION - n.min(MAX_BIT_PRECISION))
    }
}

/// Keep only the lowest `n` bits of `value`
pub fn mask_last_n_bits(value: u64, n: u8) -> u64 {
    if n == 0 {
        0
    } else if n >= MAX_BIT_PRECISION {
        value
    } else {
        value & ((1u64 << n) - 1)
    }
}

/// Collect `count` bits from `word`, starting at its most significant bit
/// and skipping every other bit. The result is right-aligned.
pub fn extract_every_second_bit(mut word: u64, count: u8) -> u64 {
    let mut value = 0u64;
    for _ in 0..count {
        value <<= 1;
        if word & FIRST_BIT_FLAGGED == FIRST_BIT_FLAGGED {
            value |= 0x1;
        }
        word <<= 2;
    }
    value
}

/// Shift a right-aligned value of `count` bits back to the top of the word
pub fn left_justify(value: u64, count: u8) -> u64 {
    if count == 0 {
        0
    } else {
        value << (MAX_BIT_PRECISION - count.min(MAX_BIT_PRECISION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_length() {
        assert_eq!(common_prefix_length(0, 0), 64);
        assert_eq!(common_prefix_length(FIRST_BIT_FLAGGED, 0), 0);
        assert_eq!(common_prefix_length(0xff00 << 48, 0xf000 << 48), 4);
    }

    #[test]
    fn test_leading_mask() {
        assert_eq!(leading_mask(0), 0);
        assert_eq!(leading_mask(1), FIRST_BIT_FLAGGED);
        assert_eq!(leading_mask(12), 0xfff0_0000_0000_0000);
        assert_eq!(leading_mask(64), !0u64);
    }

    #[test]
    fn test_mask_last_n_bits() {
        assert_eq!(mask_last_n_bits(0xff, 4), 0xf);
        assert_eq!(mask_last_n_bits(0xff, 0), 0);
        assert_eq!(mask_last_n_bits(u64::MAX, 64), u64::MAX);
        // wraparound of a decremented zero
        assert_eq!(mask_last_n_bits(0u64.wrapping_sub(1), 3), 0x7);
    }

    #[test]
    fn test_extract_every_second_bit() {
        // 1100010 -> longitude 1,0,0,0 / latitude 1,0,1
        let word = 0xc400_0000_0000_0000u64;
        assert_eq!(extract_every_second_bit(word, 4), 0x8);
        assert_eq!(extract_every_second_bit(word << 1, 3), 0x5);
    }

    #[test]
    fn test_left_justify() {
        assert_eq!(left_justify(0x5, 3), 0xa000_0000_0000_0000);
        assert_eq!(left_justify(0x1, 0), 0);
    }
}
