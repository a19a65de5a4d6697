//! Search hash command for boxes and circles

use clap::ArgMatches;
use log::debug;

use crate::api::GeoHashKit;
use crate::commands::command_traits::Command;
use crate::commands::parse_optional;
use crate::geohash::{GeoHashError, GeoHashResult};
use crate::query::GeoHashQuery;

/// Area searched by a query command
enum Area {
    Box(String),
    Circle { center: String, radius: f64 },
}

/// Command printing the search hashes of an area followed by its WKT box
pub struct QueryCommand<'a> {
    area: Area,
    kit: &'a GeoHashKit,
}

impl<'a> QueryCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a GeoHashKit) -> GeoHashResult<Self> {
        let area = if let Some(bbox) = args.get_one::<String>("bbox") {
            Area::Box(bbox.clone())
        } else if let Some(center) = args.get_one::<String>("point") {
            let radius = parse_optional::<f64>(args, "radius")?.ok_or_else(|| {
                GeoHashError::InvalidArgument("A circle query needs --radius".to_string())
            })?;
            Area::Circle {
                center: center.clone(),
                radius,
            }
        } else {
            return Err(GeoHashError::InvalidArgument(
                "Either --bbox or --point with --radius is required".to_string(),
            ));
        };

        Ok(QueryCommand { area, kit })
    }

    pub fn render(&self) -> GeoHashResult<String> {
        let query: Box<dyn GeoHashQuery> = match &self.area {
            Area::Box(bbox) => Box::new(self.kit.bbox_query(bbox)?),
            Area::Circle { center, radius } => Box::new(self.kit.circle_query(center, *radius)?),
        };
        debug!("Rendering {} search hashes", query.search_hashes().len());

        let mut result = String::new();
        for hash in query.search_hashes() {
            result.push_str(&format!("{}\n", hash));
        }
        result.push_str(&query.wkt_box());
        Ok(result)
    }
}

impl<'a> Command for QueryCommand<'a> {
    fn execute(&self) -> GeoHashResult<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
