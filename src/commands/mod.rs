//! CLI command implementations
//!
//! One command per subcommand of the `geohashkit` binary.

pub mod command_traits;
pub mod cli;
pub mod encode_command;
pub mod decode_command;
pub mod neighbors_command;
pub mod query_command;
pub mod cover_command;
pub mod distance_command;

pub use command_traits::{Command, CommandFactory};
pub use cli::build_cli;
pub use encode_command::EncodeCommand;
pub use decode_command::DecodeCommand;
pub use neighbors_command::NeighborsCommand;
pub use query_command::QueryCommand;
pub use cover_command::CoverCommand;
pub use distance_command::DistanceCommand;

use clap::ArgMatches;
use crate::api::GeoHashKit;
use crate::geohash::{GeoHashError, GeoHashResult};

/// Reads a required string argument
pub(crate) fn required_arg(args: &ArgMatches, name: &str) -> GeoHashResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| GeoHashError::InvalidArgument(format!("Missing argument '{}'", name)))
}

/// Reads an optional numeric argument
pub(crate) fn parse_optional<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> GeoHashResult<Option<T>> {
    match args.get_one::<String>(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| GeoHashError::InvalidArgument(format!("Invalid value for '{}': {}", name, value))),
        None => Ok(None),
    }
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the matching command instance for execution.
pub struct GeoHashKitCommandFactory;

impl GeoHashKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoHashKitCommandFactory
    }
}

impl Default for GeoHashKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeoHashKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a GeoHashKit) -> GeoHashResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("encode", sub)) => Ok(Box::new(EncodeCommand::new(sub, kit)?)),
            Some(("decode", sub)) => Ok(Box::new(DecodeCommand::new(sub, kit)?)),
            Some(("neighbors", sub)) => Ok(Box::new(NeighborsCommand::new(sub, kit)?)),
            Some(("query", sub)) => Ok(Box::new(QueryCommand::new(sub, kit)?)),
            Some(("cover", sub)) => Ok(Box::new(CoverCommand::new(sub, kit)?)),
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, kit)?)),
            Some((other, _)) => Err(GeoHashError::InvalidArgument(format!("Unknown command '{}'", other))),
            None => Err(GeoHashError::InvalidArgument("No command given".to_string())),
        }
    }
}

#[cfg(test)]
mod tests;
