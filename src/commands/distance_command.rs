//! Geodesic distance command

use clap::ArgMatches;

use crate::api::GeoHashKit;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::geohash::GeoHashResult;

/// Command printing the distance between two positions
pub struct DistanceCommand<'a> {
    from: String,
    to: String,
    kit: &'a GeoHashKit,
}

impl<'a> DistanceCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a GeoHashKit) -> GeoHashResult<Self> {
        Ok(DistanceCommand {
            from: required_arg(args, "from")?,
            to: required_arg(args, "to")?,
            kit,
        })
    }

    pub fn render(&self) -> GeoHashResult<String> {
        Ok(format!("{:.3} m", self.kit.distance(&self.from, &self.to)?))
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoHashResult<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
