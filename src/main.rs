use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use coordkit::config::{AppConfig, DEFAULT_CONFIG_FILE};
use coordkit::utils::logger::Logger;
use coordkit::commands::{CommandFactory, CoordkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("CoordKit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Convert coordinates between DD, DMS, DDM, UTM and MGRS")
        .arg(
            Arg::new("input")
                .help("Coordinate text in any supported format, or a file with --batch")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Output format (dd, dms, ddm, utm, mgrs)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Omit separators between tokens")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Decimal places, or MGRS digits per axis")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Print the coordinate in every format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("distance")
                .short('d')
                .long("distance")
                .help("Distance and bearing from the input to this coordinate")
                .value_name("COORDINATE")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Treat the input as a file with one coordinate per line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_FILE),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_FILE);
    let config = match AppConfig::load_or_default(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { config.log_level };
    let log_file = matches.get_one::<String>("log-file").cloned().or_else(|| config.log_file.clone());

    match log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(&path, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        },
    }

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &config);
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
