//! Grid enumeration command

use clap::ArgMatches;

use crate::api::GeoHashKit;
use crate::commands::command_traits::Command;
use crate::commands::{parse_optional, required_arg};
use crate::geohash::GeoHashResult;

/// Command printing every cell of a box, one per line
pub struct CoverCommand<'a> {
    bbox: String,
    characters: Option<u8>,
    kit: &'a GeoHashKit,
}

impl<'a> CoverCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a GeoHashKit) -> GeoHashResult<Self> {
        Ok(CoverCommand {
            bbox: required_arg(args, "bbox")?,
            characters: parse_optional(args, "chars")?,
            kit,
        })
    }

    pub fn render(&self) -> GeoHashResult<String> {
        let cells = self.kit.cover(&self.bbox, self.characters)?;
        Ok(cells.iter().map(|cell| cell.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl<'a> Command for CoverCommand<'a> {
    fn execute(&self) -> GeoHashResult<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
