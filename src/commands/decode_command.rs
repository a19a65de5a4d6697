//! Geohash decoding command

use clap::ArgMatches;

use crate::api::GeoHashKit;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::geohash::{GeoHash, GeoHashResult};

/// Command describing the cell of a geohash
pub struct DecodeCommand<'a> {
    hash: String,
    binary: bool,
    verbose: bool,
    kit: &'a GeoHashKit,
}

impl<'a> DecodeCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a GeoHashKit) -> GeoHashResult<Self> {
        Ok(DecodeCommand {
            hash: required_arg(args, "hash")?,
            binary: args.get_flag("binary"),
            verbose: args.get_flag("verbose"),
            kit,
        })
    }

    pub fn render(&self) -> GeoHashResult<String> {
        let hash = if self.binary {
            GeoHash::from_binary_string(&self.hash)?
        } else {
            self.kit.decode(&self.hash)?
        };

        let bbox = hash.bounding_box();
        let mut result = format!("Geohash: {}\n", hash);
        result.push_str(&format!("  Center: {}\n", hash.bounding_box_center()));
        result.push_str(&format!("  Box: {}\n", bbox.to_wkt()));
        result.push_str(&format!("  Bits: {}", hash.significant_bits()));

        if self.verbose {
            result.push_str(&format!("\n  Binary: {}", hash.to_binary_string()));
            result.push_str(&format!("\n  Ordinal: {}", hash.ord()));
            result.push_str(&format!(
                "\n  Size: {} x {} degrees",
                bbox.latitude_size(),
                bbox.longitude_size()
            ));
        }

        Ok(result)
    }
}

impl<'a> Command for DecodeCommand<'a> {
    fn execute(&self) -> GeoHashResult<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
