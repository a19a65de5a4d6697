use std::process;
use log::{error, LevelFilter};

use geohashkit::api::GeoHashKit;
use geohashkit::commands::{build_cli, CommandFactory, GeoHashKitCommandFactory};
use geohashkit::config::KitConfig;
use geohashkit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let mut config = match KitConfig::load(matches.get_one::<String>("config").map(String::as_str)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if matches.get_flag("verbose") {
        config.log_level = LevelFilter::Debug;
    }
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        config.log_file = Some(log_file.clone());
    }

    match &config.log_file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, config.log_level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(config.log_level)
                .parse_default_env()
                .init();
        }
    }

    let kit = GeoHashKit::new(config);
    let factory = GeoHashKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
