//! Tests for neighbour arithmetic

extern crate std;

use crate::geohash::tests::test_utils::{random_hash_with_precision, seeded_rng};
use crate::geohash::GeoHash;

fn base32(hash: &GeoHash) -> String {
    hash.to_base32().unwrap()
}

fn assert_adjacent(center: &str, expected: [&str; 8]) {
    let adjacent: Vec<String> = GeoHash::from_base32(center)
        .unwrap()
        .adjacent()
        .iter()
        .map(base32)
        .collect();
    for hash in expected {
        std::assert!(adjacent.iter().any(|h| h == hash), "{} should be adjacent to {}", hash, center);
    }
}

#[test]
fn test_right_aligned_bits() {
    let hash = GeoHash::with_bit_precision(30.0, 30.0, 16).unwrap();
    std::assert_eq!(hash.right_aligned_latitude_bits(), (0xaa, 8));
    std::assert_eq!(hash.right_aligned_longitude_bits(), (0x95, 8));
}

#[test]
fn test_neighbour_location_code() {
    let hash = GeoHash::from_long_value(0xc400_0000_0000_0000, 7).unwrap();
    std::assert_eq!(hash.right_aligned_longitude_bits(), (0x8, 4));
    std::assert_eq!(hash.right_aligned_latitude_bits(), (0x5, 3));

    let north = hash.northern_neighbour();
    std::assert_eq!(north.long_value(), 0xd000_0000_0000_0000);
    std::assert_eq!(north.significant_bits(), 7);

    let south = hash.southern_neighbour();
    std::assert_eq!(south.long_value(), 0xc000_0000_0000_0000);
    std::assert_eq!(south.significant_bits(), 7);

    std::assert_eq!(hash.eastern_neighbour().long_value(), 0xc600_0000_0000_0000);
    // wraps into the western half of the longitude range
    std::assert_eq!(hash.western_neighbour().long_value(), 0x6e00_0000_0000_0000);

    let corner = GeoHash::from_long_value(0xfe00_0000_0000_0000, 7).unwrap();
    std::assert_eq!(corner.eastern_neighbour().long_value(), 0x5400_0000_0000_0000);
}

#[test]
fn test_known_neighbouring_hashes() {
    let hash = GeoHash::from_base32("u1pb").unwrap();
    std::assert_eq!(base32(&hash.southern_neighbour()), "u0zz");
    std::assert_eq!(base32(&hash.northern_neighbour()), "u1pc");
    std::assert_eq!(base32(&hash.eastern_neighbour()), "u300");
    std::assert_eq!(base32(&hash.eastern_neighbour().eastern_neighbour()), "u302");
    std::assert_eq!(base32(&hash.western_neighbour()), "u1p8");
}

#[test]
fn test_known_adjacent_hashes() {
    assert_adjacent(
        "dqcjqc",
        ["dqcjqf", "dqcjqb", "dqcjr1", "dqcjq9", "dqcjqd", "dqcjr4", "dqcjr0", "dqcjq8"],
    );
    assert_adjacent(
        "u1x0dfg",
        ["u1x0dg4", "u1x0dg5", "u1x0dgh", "u1x0dfu", "u1x0dfs", "u1x0dfe", "u1x0dfd", "u1x0dff"],
    );
    assert_adjacent("sp2j", ["ezry", "sp2n", "sp2q", "sp2m", "sp2k", "sp2h", "ezru", "ezrv"]);
}

#[test]
fn test_adjacent_order_is_clockwise_from_north() {
    let center = GeoHash::from_base32("dqcjqc").unwrap();
    let adjacent = center.adjacent();
    std::assert_eq!(adjacent[0], center.northern_neighbour());
    std::assert_eq!(adjacent[1], center.northern_neighbour().eastern_neighbour());
    std::assert_eq!(adjacent[2], center.eastern_neighbour());
    std::assert_eq!(adjacent[3], center.southern_neighbour().eastern_neighbour());
    std::assert_eq!(adjacent[4], center.southern_neighbour());
    std::assert_eq!(adjacent[5], center.southern_neighbour().western_neighbour());
    std::assert_eq!(adjacent[6], center.western_neighbour());
    std::assert_eq!(adjacent[7], center.northern_neighbour().western_neighbour());

    for hash in adjacent.iter() {
        std::assert!(hash.bounding_box().contains(&hash.point()));
        std::assert_eq!(hash.point(), hash.bounding_box_center());
    }
}

#[test]
fn test_neighbours_near_meridian() {
    let west = GeoHash::from_base32("sp2j").unwrap().western_neighbour();
    std::assert_eq!(base32(&west), "ezrv");
    std::assert_eq!(base32(&west.western_neighbour()), "ezrt");
}

#[test]
fn test_moving_in_circle() {
    for (latitude, longitude) in [(34.2, -45.123), (45.0, 180.0), (90.0, 180.0), (0.0, -180.0)] {
        let start = GeoHash::with_character_precision(latitude, longitude, 12).unwrap();
        let end = start
            .eastern_neighbour()
            .southern_neighbour()
            .western_neighbour()
            .northern_neighbour();
        std::assert_eq!(start, end, "moving around ({},{})", latitude, longitude);
        std::assert_eq!(start.bounding_box(), end.bounding_box());
    }
}

#[test]
fn test_moving_around_the_world_on_hash_strips() {
    let directions: [fn(&GeoHash) -> GeoHash; 4] = [
        GeoHash::northern_neighbour,
        GeoHash::eastern_neighbour,
        GeoHash::southern_neighbour,
        GeoHash::western_neighbour,
    ];

    let mut rng = seeded_rng();
    for step in directions {
        for bits in 2..16u8 {
            let hash = random_hash_with_precision(&mut rng, bits);
            let mut result = hash;
            for _ in 0..(1u32 << bits) {
                result = step(&result);
            }
            std::assert_eq!(hash, result, "{} bits", bits);
        }
    }
}

#[test]
fn test_globe_has_itself_as_neighbour() {
    let globe = GeoHash::from_binary_string("").unwrap();
    std::assert_eq!(globe.northern_neighbour(), globe);
    std::assert_eq!(globe.western_neighbour(), globe);
}
