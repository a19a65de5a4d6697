//! Grid enumeration between two corner cells
//!
//! A `TwoGeoHashBoundingBox` pins down a grid-aligned rectangle by its
//! bottom-left and top-right cells. The cells inside it can be walked in
//! Z-order or drawn at random.

mod two_hash_bbox;
mod iterator;
mod sampler;
#[cfg(test)]
mod tests;

pub use two_hash_bbox::TwoGeoHashBoundingBox;
pub use iterator::BoundingBoxGeoHashIterator;
pub use sampler::BoundingBoxSampler;
