//! Command line definition

use clap::{Arg, ArgAction, ArgGroup, Command as ClapCommand};

fn value_arg(name: &'static str, help: &'static str, value_name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name(value_name)
        .allow_hyphen_values(true)
}

/// Build the argument parser of the `geohashkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geohashkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Encode, decode and search with geohashes")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (defaults to ./geohashkit.toml when present)")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("encode")
                .about("Encode a position")
                .arg(value_arg("lat", "Latitude in degrees", "DEGREES").required(true))
                .arg(value_arg("lon", "Longitude in degrees", "DEGREES").required(true))
                .arg(value_arg("chars", "Number of base32 characters", "N"))
                .arg(value_arg("bits", "Number of bits, printed as a binary string", "N"))
                .group(ArgGroup::new("precision").args(["chars", "bits"]).multiple(false)),
        )
        .subcommand(
            ClapCommand::new("decode")
                .about("Decode a geohash into its cell")
                .arg(Arg::new("hash").help("Geohash to decode").required(true).index(1))
                .arg(
                    Arg::new("binary")
                        .long("binary")
                        .help("Read the hash as a binary string")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("neighbors")
                .about("List the eight cells around a geohash")
                .arg(Arg::new("hash").help("Base32 geohash").required(true).index(1)),
        )
        .subcommand(
            ClapCommand::new("query")
                .about("Find the search hashes of a box or a circle")
                .arg(value_arg("bbox", "Box as 'south,north,west,east'", "BBOX"))
                .arg(value_arg("point", "Circle center as 'lat,lon'", "LAT,LON"))
                .arg(value_arg("radius", "Circle radius in meters", "METERS"))
                .group(ArgGroup::new("area").args(["bbox", "point"]).required(true)),
        )
        .subcommand(
            ClapCommand::new("cover")
                .about("Enumerate every cell of a box")
                .arg(value_arg("bbox", "Box as 'south,north,west,east'", "BBOX").required(true))
                .arg(value_arg("chars", "Number of base32 characters", "N")),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Distance in meters between two positions")
                .arg(value_arg("from", "First position as 'lat,lon'", "LAT,LON").required(true))
                .arg(value_arg("to", "Second position as 'lat,lon'", "LAT,LON").required(true)),
        )
}
