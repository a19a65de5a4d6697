//! Tests for the grid iterator

extern crate std;

use std::collections::HashSet;

use crate::coordinate::{BoundingBox, WGS84Point};
use crate::geohash::GeoHash;
use crate::grid::{BoundingBoxGeoHashIterator, TwoGeoHashBoundingBox};

fn san_francisco() -> BoundingBox {
    BoundingBox::new(37.7, 37.84, -122.52, -122.35).unwrap()
}

/// Collect the cells and check they are ordered with centers inside the box
fn check_iterator(iterator: BoundingBoxGeoHashIterator) -> Vec<GeoHash> {
    let area = iterator.bounding_box().bounding_box();
    let hashes: Vec<GeoHash> = iterator.collect();

    for pair in hashes.windows(2) {
        std::assert!(pair[0] < pair[1], "{} should come before {}", pair[0], pair[1]);
    }
    for hash in hashes.iter() {
        std::assert!(area.contains(&hash.point()), "{} is outside {}", hash, area);
    }
    hashes
}

fn assert_no_duplicates(hashes: &[GeoHash]) {
    let mut seen = HashSet::new();
    for hash in hashes {
        std::assert!(seen.insert(*hash), "{} was produced twice", hash);
    }
}

#[test]
fn test_iterate_san_francisco() {
    let hashes = check_iterator(BoundingBoxGeoHashIterator::with_bit_precision(&san_francisco(), 10).unwrap());
    std::assert_eq!(hashes.len(), 1);

    let hashes = check_iterator(BoundingBoxGeoHashIterator::with_bit_precision(&san_francisco(), 35).unwrap());
    std::assert_eq!(hashes.len(), 12875);
}

#[test]
fn test_iterate_two_character_cells() {
    let bbox = BoundingBox::new(28.5, 67.15, -33.2, 44.5).unwrap();
    let hashes = check_iterator(BoundingBoxGeoHashIterator::with_character_precision(&bbox, 2).unwrap());
    std::assert_eq!(hashes.len(), 49);
}

#[test]
fn test_all_cells() {
    let globe = BoundingBox::new(-90.0, 90.0, -180.0, 180.0).unwrap();
    let hashes = check_iterator(BoundingBoxGeoHashIterator::with_character_precision(&globe, 2).unwrap());
    assert_no_duplicates(&hashes);
    std::assert_eq!(hashes.len(), 1024);
    std::assert_eq!(hashes[0].to_base32().unwrap(), "00");
    std::assert_eq!(hashes[1023].to_base32().unwrap(), "zz");
}

#[test]
fn test_top_right_corner_does_not_wrap() {
    // entirely inside the "zz" cell
    let bbox = BoundingBox::new(84.4, 84.9, 169.3, 179.6).unwrap();
    let hashes: Vec<GeoHash> = BoundingBoxGeoHashIterator::with_character_precision(&bbox, 2)
        .unwrap()
        .collect();
    assert_no_duplicates(&hashes);
    std::assert_eq!(hashes.len(), 1);
    std::assert_eq!(hashes[0].to_base32().unwrap(), "zz");
}

#[test]
fn test_wide_box_has_no_duplicates() {
    let bbox = BoundingBox::new(72.28907, 88.62655, -50.976562, 170.50781).unwrap();
    let hashes = check_iterator(BoundingBoxGeoHashIterator::with_character_precision(&bbox, 2).unwrap());
    assert_no_duplicates(&hashes);
    std::assert_eq!(hashes.len(), 84);
}

#[test]
fn test_steps_between_corners() {
    let bottom_left = GeoHash::with_bit_precision(37.7, -122.52, 35).unwrap();
    let top_right = GeoHash::with_bit_precision(37.84, -122.35, 35).unwrap();
    std::assert_eq!(GeoHash::steps_between(&bottom_left, &top_right).unwrap(), 48472);

    let pair = TwoGeoHashBoundingBox::new(&bottom_left, &top_right).unwrap();
    let iterator = BoundingBoxGeoHashIterator::new(pair);
    std::assert_eq!(iterator.remaining_steps(), 48473);
    std::assert_eq!(iterator.count(), 12875);
}

#[test]
fn test_corner_cells_are_produced() {
    let p1 = WGS84Point::new(10.557597041722232, -35.52832642341309).unwrap();
    let p2 = WGS84Point::new(-41.76269104573268, -68.00914348298193).unwrap();
    let outside = WGS84Point::new(51.473854, -9.388135).unwrap();

    let top_right = GeoHash::from_point(&p1, 6).unwrap();
    let bottom_left = GeoHash::from_point(&p2, 6).unwrap();
    let pair = TwoGeoHashBoundingBox::new(&bottom_left, &top_right).unwrap();
    let hashes: Vec<GeoHash> = BoundingBoxGeoHashIterator::new(pair).collect();

    std::assert!(hashes.iter().any(|h| h.contains(&p1)));
    std::assert!(hashes.iter().any(|h| h.contains(&p2)));
    std::assert!(!hashes.iter().any(|h| h.contains(&outside)));
}
