//! Tests for circle queries

extern crate std;

use crate::coordinate::{VincentyGeodesy, WGS84Point};
use crate::geohash::GeoHash;
use crate::geohash::tests::test_utils::seeded_rng;
use crate::query::{GeoHashCircleQuery, GeoHashQuery};

use rand::Rng;

const ONE_HUNDRED_KM: f64 = 100.0 * 1000.0;

#[test]
fn test_circle_query_contains_nearby_points() {
    let center = WGS84Point::new(39.86391280373075, 116.37356590048701).unwrap();
    let query = GeoHashCircleQuery::new(&center, 589.0).unwrap();

    // about 430 meters from the center
    let test1 = WGS84Point::new(39.8648866576058, 116.378465869303).unwrap();
    // about 510 meters from the center
    let test2 = WGS84Point::new(39.8664787092599, 116.378552856158).unwrap();

    std::assert!(query.contains_point(&test1));
    std::assert!(query.contains_point(&test2));
    std::assert!(query.contains_point(&center));
}

#[test]
fn test_display() {
    let center = WGS84Point::new(47.0, 8.0).unwrap();
    let query = GeoHashCircleQuery::new(&center, ONE_HUNDRED_KM).unwrap();
    std::assert!(query.to_string().contains("100km"), "{}", query);

    let query = GeoHashCircleQuery::new(&center, 589.0).unwrap();
    std::assert_eq!(query.to_string(), "Circle Query [center=(47,8), radius=589m]");
}

#[test]
fn test_points_within_the_radius_are_matched() {
    let mut rng = seeded_rng();
    let center = WGS84Point::new(rng.random_range(-60.0..60.0), rng.random_range(-170.0..170.0)).unwrap();
    let query = GeoHashCircleQuery::new(&center, ONE_HUNDRED_KM).unwrap();

    let mut closer = 0;
    for _ in 0..20000 {
        let point = WGS84Point::new(
            center.latitude() + rng.random_range(-1.5..1.5),
            center.longitude() + rng.random_range(-2.0..2.0),
        )
        .unwrap();
        let hash = GeoHash::from_point(&point, 64).unwrap();
        // the enclosing rectangle narrows slightly on its equator side
        if VincentyGeodesy::distance_in_meters(&center, &point) <= 0.9 * ONE_HUNDRED_KM {
            closer += 1;
            std::assert!(query.contains(&hash), "{} should be matched by {}", point, query);
        }
    }
    std::assert!(closer > 0);
}

#[test]
fn test_circle_around_the_seam() {
    let center = WGS84Point::new(0.0, 179.9).unwrap();
    let query = GeoHashCircleQuery::new(&center, 50_000.0).unwrap();

    std::assert!(query.contains_point(&WGS84Point::new(0.0, 179.95).unwrap()));
    std::assert!(query.contains_point(&WGS84Point::new(0.0, -179.9).unwrap()));
    std::assert!(query.search_hashes().len() >= 2);
}

#[test]
fn test_invalid_radius_is_rejected() {
    let center = WGS84Point::new(47.0, 8.0).unwrap();
    std::assert!(GeoHashCircleQuery::new(&center, -1.0).is_err());
    std::assert!(GeoHashCircleQuery::new(&center, f64::NAN).is_err());
    std::assert!(GeoHashCircleQuery::new(&center, 0.0).is_ok());
}
