pub mod coordinate;
pub mod geohash;
pub mod grid;
pub mod query;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoHashKit;
pub use crate::config::KitConfig;

pub use coordinate::{BoundingBox, WGS84Point, VincentyGeodesy};
pub use geohash::{GeoHash, GeoHashError, GeoHashResult};
pub use grid::{TwoGeoHashBoundingBox, BoundingBoxGeoHashIterator, BoundingBoxSampler};
pub use query::{GeoHashQuery, GeoHashBoundingBoxQuery, GeoHashCircleQuery};
