//! Position encoding command

use clap::ArgMatches;
use log::debug;

use crate::api::GeoHashKit;
use crate::commands::command_traits::Command;
use crate::commands::{parse_optional, required_arg};
use crate::geohash::{GeoHashError, GeoHashResult};

/// Command printing the geohash of a position
pub struct EncodeCommand<'a> {
    latitude: f64,
    longitude: f64,
    characters: Option<u8>,
    bits: Option<u8>,
    kit: &'a GeoHashKit,
}

impl<'a> EncodeCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a GeoHashKit) -> GeoHashResult<Self> {
        let latitude = parse_degrees(&required_arg(args, "lat")?, "latitude")?;
        let longitude = parse_degrees(&required_arg(args, "lon")?, "longitude")?;

        Ok(EncodeCommand {
            latitude,
            longitude,
            characters: parse_optional(args, "chars")?,
            bits: parse_optional(args, "bits")?,
            kit,
        })
    }

    /// The text printed by the command
    pub fn render(&self) -> GeoHashResult<String> {
        match self.bits {
            Some(bits) => {
                debug!("Encoding with {} bits", bits);
                let hash = self.kit.encode_bits(self.latitude, self.longitude, bits)?;
                Ok(hash.to_binary_string())
            }
            None => self.kit.encode(self.latitude, self.longitude, self.characters),
        }
    }
}

fn parse_degrees(value: &str, name: &str) -> GeoHashResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| GeoHashError::InvalidArgument(format!("Invalid {} value: {}", name, value)))
}

impl<'a> Command for EncodeCommand<'a> {
    fn execute(&self) -> GeoHashResult<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
