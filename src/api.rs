use log::info;

use crate::config::KitConfig;
use crate::coordinate::{BoundingBox, VincentyGeodesy, WGS84Point};
use crate::geohash::{GeoHash, GeoHashError, GeoHashResult, MAX_BIT_PRECISION, MAX_CHARACTER_PRECISION};
use crate::grid::BoundingBoxGeoHashIterator;
use crate::query::{GeoHashBoundingBoxQuery, GeoHashCircleQuery, GeoHashQuery};
use crate::utils::progress::ProgressTracker;

/// Main interface to the geohashkit library
///
/// Every method accepts the textual forms used on the command line
/// (`"lat,lon"` points, `"south,north,west,east"` boxes, base32 hashes).
pub struct GeoHashKit {
    config: KitConfig,
}

impl Default for GeoHashKit {
    fn default() -> Self {
        GeoHashKit::new(KitConfig::default())
    }
}

impl GeoHashKit {
    /// Create a new kit using the given settings
    pub fn new(config: KitConfig) -> Self {
        GeoHashKit { config }
    }

    pub fn config(&self) -> &KitConfig {
        &self.config
    }

    /// Encode a position as a base32 hash
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees
    /// * `longitude` - Longitude in degrees
    /// * `characters` - Length of the hash, defaults to the configured precision
    ///
    /// # Returns
    /// The base32 string or an error for invalid coordinates or precision
    pub fn encode(&self, latitude: f64, longitude: f64, characters: Option<u8>) -> GeoHashResult<String> {
        let characters = characters.unwrap_or(self.config.characters);
        if characters == 0 || characters > MAX_CHARACTER_PRECISION {
            return Err(GeoHashError::InvalidArgument(format!(
                "A geohash can only be 1 to {} characters long, got {}",
                MAX_CHARACTER_PRECISION, characters
            )));
        }

        let hash = GeoHash::with_character_precision(latitude, longitude, characters)?.to_base32()?;
        info!("Encoded ({},{}) as {}", latitude, longitude, hash);
        Ok(hash)
    }

    /// Encode a position with an explicit number of bits
    pub fn encode_bits(&self, latitude: f64, longitude: f64, number_of_bits: u8) -> GeoHashResult<GeoHash> {
        let hash = GeoHash::with_bit_precision(latitude, longitude, number_of_bits)?;
        info!(
            "Encoded ({},{}) with {} of {} bits as {}",
            latitude,
            longitude,
            number_of_bits,
            MAX_BIT_PRECISION,
            hash.to_binary_string()
        );
        Ok(hash)
    }

    /// Decode a base32 hash into its cell
    pub fn decode(&self, geohash: &str) -> GeoHashResult<GeoHash> {
        let hash = GeoHash::from_base32(geohash)?;
        info!("Decoded {} to cell {}", geohash, hash.bounding_box());
        Ok(hash)
    }

    /// The eight cells around a base32 hash, clockwise from north
    pub fn neighbors(&self, geohash: &str) -> GeoHashResult<[GeoHash; 8]> {
        let neighbors = self.decode(geohash)?.adjacent();
        info!("Computed the neighbours of {}", geohash);
        Ok(neighbors)
    }

    /// Cells covering a `south,north,west,east` box
    pub fn bbox_query(&self, bbox: &str) -> GeoHashResult<GeoHashBoundingBoxQuery> {
        let bbox = BoundingBox::from_string(bbox)?;
        let query = GeoHashBoundingBoxQuery::new(&bbox);
        info!(
            "Box query {} needs {} search hashes",
            bbox,
            query.search_hashes().len()
        );
        Ok(query)
    }

    /// Cells covering a circle around a `lat,lon` center
    pub fn circle_query(&self, center: &str, radius_in_meters: f64) -> GeoHashResult<GeoHashCircleQuery> {
        let center = WGS84Point::from_string(center)?;
        let query = GeoHashCircleQuery::new(&center, radius_in_meters)?;
        info!("{} needs {} search hashes", query, query.search_hashes().len());
        Ok(query)
    }

    /// Enumerate every cell of the given length inside a box
    ///
    /// Shows a progress bar while walking when `output.progress` is enabled.
    pub fn cover(&self, bbox: &str, characters: Option<u8>) -> GeoHashResult<Vec<GeoHash>> {
        let bbox = BoundingBox::from_string(bbox)?;
        let characters = characters.unwrap_or(self.config.characters);
        let iterator = BoundingBoxGeoHashIterator::with_character_precision(&bbox, characters)?;

        let progress = if self.config.progress {
            ProgressTracker::new(iterator.remaining_steps(), "Enumerating cells")
        } else {
            ProgressTracker::hidden()
        };

        let mut cells = Vec::new();
        let mut last_ord = iterator.bounding_box().bottom_left().ord();
        for cell in iterator {
            // skipped ordinals count as visited
            progress.increment(cell.ord() - last_ord + u64::from(cells.is_empty()));
            last_ord = cell.ord();
            cells.push(cell);
        }
        progress.finish();

        info!("Covered {} with {} cells of {} characters", bbox, cells.len(), characters);
        Ok(cells)
    }

    /// Great-circle distance in meters between two `lat,lon` points
    pub fn distance(&self, from: &str, to: &str) -> GeoHashResult<f64> {
        let from = WGS84Point::from_string(from)?;
        let to = WGS84Point::from_string(to)?;
        let meters = VincentyGeodesy::distance_in_meters(&from, &to);
        if meters.is_nan() {
            return Err(GeoHashError::IllegalState(format!(
                "Distance from {} to {} did not converge",
                from, to
            )));
        }
        info!("Distance from {} to {} is {:.3} m", from, to, meters);
        Ok(meters)
    }
}
