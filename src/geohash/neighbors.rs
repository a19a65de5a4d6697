//! Neighbour arithmetic on geohash cells
//!
//! The interleaved word is split into its latitude and longitude parts,
//! one part is incremented or decremented modulo its width, and the two
//! parts are interleaved again. Wrapping makes the grid a torus: moving
//! east from the last column lands in the first one.

use super::builder::HashBuilder;
use super::constants::masks::FIRST_BIT_FLAGGED;
use super::hash::GeoHash;
use crate::utils::bit_utils::{extract_every_second_bit, left_justify, mask_last_n_bits};

impl GeoHash {
    pub fn northern_neighbour(&self) -> GeoHash {
        let (latitude_bits, latitude_count) = self.right_aligned_latitude_bits();
        let (longitude_bits, longitude_count) = self.right_aligned_longitude_bits();
        let latitude_bits = mask_last_n_bits(latitude_bits.wrapping_add(1), latitude_count);
        self.recombine(latitude_bits, latitude_count, longitude_bits, longitude_count)
    }

    pub fn southern_neighbour(&self) -> GeoHash {
        let (latitude_bits, latitude_count) = self.right_aligned_latitude_bits();
        let (longitude_bits, longitude_count) = self.right_aligned_longitude_bits();
        let latitude_bits = mask_last_n_bits(latitude_bits.wrapping_sub(1), latitude_count);
        self.recombine(latitude_bits, latitude_count, longitude_bits, longitude_count)
    }

    pub fn eastern_neighbour(&self) -> GeoHash {
        let (latitude_bits, latitude_count) = self.right_aligned_latitude_bits();
        let (longitude_bits, longitude_count) = self.right_aligned_longitude_bits();
        let longitude_bits = mask_last_n_bits(longitude_bits.wrapping_add(1), longitude_count);
        self.recombine(latitude_bits, latitude_count, longitude_bits, longitude_count)
    }

    pub fn western_neighbour(&self) -> GeoHash {
        let (latitude_bits, latitude_count) = self.right_aligned_latitude_bits();
        let (longitude_bits, longitude_count) = self.right_aligned_longitude_bits();
        let longitude_bits = mask_last_n_bits(longitude_bits.wrapping_sub(1), longitude_count);
        self.recombine(latitude_bits, latitude_count, longitude_bits, longitude_count)
    }

    /// The eight surrounding cells, clockwise from north:
    /// `[N, NE, E, SE, S, SW, W, NW]`
    pub fn adjacent(&self) -> [GeoHash; 8] {
        let north = self.northern_neighbour();
        let east = self.eastern_neighbour();
        let south = self.southern_neighbour();
        let west = self.western_neighbour();
        [
            north,
            north.eastern_neighbour(),
            east,
            south.eastern_neighbour(),
            south,
            south.western_neighbour(),
            west,
            north.western_neighbour(),
        ]
    }

    /// Latitude bits (odd positions) as a right-aligned integer and their count
    pub fn right_aligned_latitude_bits(&self) -> (u64, u8) {
        let count = self.significant_bits / 2;
        (extract_every_second_bit(self.bits << 1, count), count)
    }

    /// Longitude bits (even positions) as a right-aligned integer and their count
    pub fn right_aligned_longitude_bits(&self) -> (u64, u8) {
        let count = self.significant_bits - self.significant_bits / 2;
        (extract_every_second_bit(self.bits, count), count)
    }

    fn recombine(&self, latitude_bits: u64, latitude_count: u8, longitude_bits: u64, longitude_count: u8) -> GeoHash {
        let mut latitude_word = left_justify(latitude_bits, latitude_count);
        let mut longitude_word = left_justify(longitude_bits, longitude_count);

        let mut builder = HashBuilder::new();
        for i in 0..self.significant_bits {
            let word = if i % 2 == 0 {
                &mut longitude_word
            } else {
                &mut latitude_word
            };
            builder.push_bit(*word & FIRST_BIT_FLAGGED == FIRST_BIT_FLAGGED);
            *word <<= 1;
        }
        builder.build(None)
    }
}
