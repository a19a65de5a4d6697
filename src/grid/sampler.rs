//! Random sampling of the cells inside a two-hash box
//!
//! Ordinals between the two corner cells are drawn without replacement;
//! cells whose center lies outside the box are skipped.

use std::collections::HashSet;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::two_hash_bbox::TwoGeoHashBoundingBox;
use crate::geohash::{GeoHash, GeoHashError, GeoHashResult};

/// Draws every cell of a `TwoGeoHashBoundingBox` exactly once, in random order
pub struct BoundingBoxSampler {
    bounding_box: TwoGeoHashBoundingBox,
    already_used: HashSet<u32>,
    /// Number of ordinals from the bottom-left to the top-right cell, inclusive
    total: u32,
    rng: StdRng,
}

impl BoundingBoxSampler {
    /// Sampler seeded from the operating system
    pub fn new(bounding_box: TwoGeoHashBoundingBox) -> GeoHashResult<Self> {
        Self::with_rng(bounding_box, StdRng::from_os_rng())
    }

    /// Sampler with a reproducible sequence
    pub fn with_seed(bounding_box: TwoGeoHashBoundingBox, seed: u64) -> GeoHashResult<Self> {
        Self::with_rng(bounding_box, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounding_box: TwoGeoHashBoundingBox, rng: StdRng) -> GeoHashResult<Self> {
        let steps = GeoHash::steps_between(&bounding_box.bottom_left(), &bounding_box.top_right())?;
        if !(0..=i32::MAX as i64).contains(&steps) {
            warn!(
                "Refusing to sample between {} and {}",
                bounding_box.bottom_left(),
                bounding_box.top_right()
            );
            return Err(GeoHashError::InvalidArgument(format!(
                "A box spanning {} steps cannot be sampled",
                steps
            )));
        }
        debug!("Sampling up to {} cells", steps + 1);

        Ok(BoundingBoxSampler {
            bounding_box,
            already_used: HashSet::new(),
            total: steps as u32 + 1,
            rng,
        })
    }

    pub fn bounding_box(&self) -> &TwoGeoHashBoundingBox {
        &self.bounding_box
    }

    fn draw_unused(&mut self) -> Option<u32> {
        if self.already_used.len() as u32 >= self.total {
            return None;
        }
        loop {
            let index = self.rng.random_range(0..self.total);
            if self.already_used.insert(index) {
                return Some(index);
            }
        }
    }
}

impl Iterator for BoundingBoxSampler {
    type Item = GeoHash;

    fn next(&mut self) -> Option<GeoHash> {
        let area = self.bounding_box.bounding_box();
        while let Some(index) = self.draw_unused() {
            let candidate = self.bounding_box.bottom_left().next_by(index as i64);
            if area.contains(&candidate.point()) {
                return Some(candidate);
            }
        }
        None
    }
}
