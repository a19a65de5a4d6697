//! Tests for the command line commands

extern crate std;

use crate::api::GeoHashKit;
use crate::commands::{build_cli, CommandFactory, GeoHashKitCommandFactory};
use crate::commands::{CoverCommand, DecodeCommand, DistanceCommand, EncodeCommand, NeighborsCommand, QueryCommand};
use crate::config::KitConfig;
use crate::geohash::GeoHash;

fn quiet_kit() -> GeoHashKit {
    GeoHashKit::new(KitConfig {
        progress: false,
        ..KitConfig::default()
    })
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["geohashkit"];
    full.extend_from_slice(args);
    let matches = build_cli().try_get_matches_from(full).unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    sub.clone()
}

#[test]
fn test_encode_with_characters() {
    let kit = quiet_kit();
    let args = sub_matches(&["encode", "--lat", "42.6", "--lon", "-5.6", "--chars", "5"]);
    let command = EncodeCommand::new(&args, &kit).unwrap();
    std::assert_eq!(command.render().unwrap(), "ezs42");
}

#[test]
fn test_encode_defaults_to_configured_precision() {
    let kit = GeoHashKit::new(KitConfig {
        characters: 3,
        progress: false,
        ..KitConfig::default()
    });
    let args = sub_matches(&["encode", "--lat", "42.6", "--lon", "-5.6"]);
    std::assert_eq!(EncodeCommand::new(&args, &kit).unwrap().render().unwrap(), "ezs");
}

#[test]
fn test_encode_with_bits() {
    let kit = quiet_kit();
    let args = sub_matches(&["encode", "--lat", "0", "--lon", "0", "--bits", "4"]);
    std::assert_eq!(EncodeCommand::new(&args, &kit).unwrap().render().unwrap(), "1100");
}

#[test]
fn test_encode_rejects_both_precisions() {
    let result = build_cli().try_get_matches_from([
        "geohashkit", "encode", "--lat", "1", "--lon", "1", "--chars", "3", "--bits", "4",
    ]);
    std::assert!(result.is_err());
}

#[test]
fn test_encode_rejects_bad_input() {
    let kit = quiet_kit();
    let args = sub_matches(&["encode", "--lat", "91", "--lon", "0"]);
    std::assert!(EncodeCommand::new(&args, &kit).unwrap().render().is_err());

    let args = sub_matches(&["encode", "--lat", "north", "--lon", "0"]);
    std::assert!(EncodeCommand::new(&args, &kit).is_err());

    let args = sub_matches(&["encode", "--lat", "1", "--lon", "0", "--chars", "13"]);
    std::assert!(EncodeCommand::new(&args, &kit).unwrap().render().is_err());
}

#[test]
fn test_decode() {
    let kit = quiet_kit();
    let args = sub_matches(&["decode", "u0qj"]);
    let output = DecodeCommand::new(&args, &kit).unwrap().render().unwrap();
    let cell = GeoHash::from_base32("u0qj").unwrap().bounding_box();

    std::assert!(output.starts_with("Geohash: u0qj\n"), "{}", output);
    std::assert!(output.contains(&cell.to_wkt()), "{}", output);
    std::assert!(output.ends_with("Bits: 20"), "{}", output);
}

#[test]
fn test_decode_binary_and_verbose() {
    let kit = quiet_kit();
    let args = sub_matches(&["decode", "--binary", "-v", "101"]);
    let output = DecodeCommand::new(&args, &kit).unwrap().render().unwrap();

    std::assert!(output.starts_with("Geohash: 101\n"), "{}", output);
    std::assert!(output.contains("Ordinal: 5"), "{}", output);
    std::assert!(output.contains("Binary: 101"), "{}", output);
}

#[test]
fn test_decode_rejects_invalid_hash() {
    let kit = quiet_kit();
    let args = sub_matches(&["decode", "u0qa"]);
    std::assert!(DecodeCommand::new(&args, &kit).unwrap().render().is_err());
}

#[test]
fn test_neighbors() {
    let kit = quiet_kit();
    let args = sub_matches(&["neighbors", "sp2j"]);
    let output = NeighborsCommand::new(&args, &kit).unwrap().render().unwrap();
    std::assert_eq!(
        output,
        "N  ezry\nNE sp2n\nE  sp2q\nSE sp2m\nS  sp2k\nSW sp2h\nW  ezru\nNW ezrv"
    );
}

#[test]
fn test_box_query() {
    let kit = quiet_kit();
    let args = sub_matches(&["query", "--bbox", "47.300200,47.447907,8.471276,8.760941"]);
    let output = QueryCommand::new(&args, &kit).unwrap().render().unwrap();
    let wkt = GeoHash::from_base32("u0qj").unwrap().bounding_box().to_wkt();
    std::assert_eq!(output, format!("u0qj\n{}", wkt));
}

#[test]
fn test_box_query_across_the_seam() {
    let kit = quiet_kit();
    let args = sub_matches(&[
        "query",
        "--bbox",
        "40.2090980098,40.21982983232432,170.523432424324,-170.494234232442",
    ]);
    let output = QueryCommand::new(&args, &kit).unwrap().render().unwrap();
    let lines: Vec<&str> = output.lines().collect();

    std::assert_eq!(lines.len(), 3);
    std::assert!(lines.contains(&"xz") && lines.contains(&"8p"), "{}", output);
    std::assert_eq!(lines[2], "BOX(168.75 39.375,-168.75 45)");
}

#[test]
fn test_circle_query_needs_radius() {
    let kit = quiet_kit();
    let args = sub_matches(&["query", "--point", "47,8"]);
    std::assert!(QueryCommand::new(&args, &kit).is_err());

    let args = sub_matches(&["query", "--point", "47,8", "--radius", "589"]);
    let output = QueryCommand::new(&args, &kit).unwrap().render().unwrap();
    std::assert!(output.lines().count() >= 2);
    std::assert!(output.lines().last().unwrap().starts_with("BOX("), "{}", output);
}

#[test]
fn test_query_needs_an_area() {
    std::assert!(build_cli().try_get_matches_from(["geohashkit", "query"]).is_err());
}

#[test]
fn test_cover_whole_globe() {
    let kit = quiet_kit();
    let args = sub_matches(&["cover", "--bbox", "-90,90,-180,180", "--chars", "1"]);
    let output = CoverCommand::new(&args, &kit).unwrap().render().unwrap();
    let cells: Vec<&str> = output.lines().collect();

    std::assert_eq!(cells.len(), 32);
    std::assert_eq!(cells[0], "0");
    std::assert_eq!(cells[31], "z");
}

#[test]
fn test_distance() {
    let kit = quiet_kit();
    let args = sub_matches(&["distance", "--from", "0,0", "--to", "0,1"]);
    let output = DistanceCommand::new(&args, &kit).unwrap().render().unwrap();
    let meters: f64 = output.trim_end_matches(" m").parse().unwrap();
    std::assert!((meters - 111_319.49).abs() < 0.01, "{}", output);
}

#[test]
fn test_factory_dispatch() {
    let kit = quiet_kit();
    let factory = GeoHashKitCommandFactory::new();

    let matches = build_cli()
        .try_get_matches_from(["geohashkit", "distance", "--from", "0,0", "--to", "-10,-20"])
        .unwrap();
    std::assert!(factory.create_command(&matches, &kit).is_ok());

    let matches = build_cli()
        .try_get_matches_from(["geohashkit", "encode", "--lat", "x", "--lon", "0"])
        .unwrap();
    std::assert!(factory.create_command(&matches, &kit).is_err());
}

#[test]
fn test_global_options_after_subcommand() {
    let matches = build_cli()
        .try_get_matches_from(["geohashkit", "neighbors", "u1pb", "--log-file", "out.log", "-v"])
        .unwrap();
    std::assert_eq!(matches.get_one::<String>("log-file").map(String::as_str), Some("out.log"));
    std::assert!(matches.get_flag("verbose"));
}
