//! Covering-set queries
//!
//! Rectangle and circle searches expressed as a small set of geohash cells
//! that can be matched by prefix.

mod query_traits;
mod bbox_query;
mod circle_query;
#[cfg(test)]
mod tests;

pub use query_traits::GeoHashQuery;
pub use bbox_query::GeoHashBoundingBoxQuery;
pub use circle_query::GeoHashCircleQuery;
