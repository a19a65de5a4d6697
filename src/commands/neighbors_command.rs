//! Neighbour listing command

use clap::ArgMatches;

use crate::api::GeoHashKit;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::geohash::GeoHashResult;

const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Command listing the eight cells around a geohash
pub struct NeighborsCommand<'a> {
    hash: String,
    kit: &'a GeoHashKit,
}

impl<'a> NeighborsCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a GeoHashKit) -> GeoHashResult<Self> {
        Ok(NeighborsCommand {
            hash: required_arg(args, "hash")?,
            kit,
        })
    }

    pub fn render(&self) -> GeoHashResult<String> {
        let neighbors = self.kit.neighbors(&self.hash)?;
        let lines = DIRECTIONS
            .iter()
            .zip(neighbors.iter())
            .map(|(direction, hash)| format!("{:<2} {}", direction, hash))
            .collect::<Vec<_>>();
        Ok(lines.join("\n"))
    }
}

impl<'a> Command for NeighborsCommand<'a> {
    fn execute(&self) -> GeoHashResult<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
