//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod distance_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use distance_command::DistanceCommand;
pub use batch_command::{BatchCommand, BatchReport};

use clap::ArgMatches;
use crate::config::AppConfig;
use crate::errors::{CoordError, CoordResult};
use crate::format::{FormatKind, FormatOptions};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl Default for CoordkitCommandFactory {
    fn default() -> Self {
        CoordkitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a AppConfig) -> CoordResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("distance").is_some() {
            Ok(Box::new(DistanceCommand::new(args)?))
        } else if args.get_flag("batch") {
            Ok(Box::new(BatchCommand::new(args, config)?))
        } else {
            // Default to converting a single coordinate
            Ok(Box::new(ConvertCommand::new(args, config)?))
        }
    }
}

/// Resolve the output format and options: CLI flags win over the config file
pub(crate) fn output_settings(args: &ArgMatches, config: &AppConfig) -> CoordResult<(FormatKind, FormatOptions)> {
    let kind = match args.get_one::<String>("to") {
        Some(name) => name.parse::<FormatKind>()?,
        None => config.format,
    };

    let mut options = config.options;
    if args.get_flag("compact") {
        options.compact = true;
    }
    if let Some(precision) = args.get_one::<String>("precision") {
        let value = precision.parse::<u8>()
            .map_err(|_| CoordError::GenericError(format!("Invalid precision: {}", precision)))?;
        options.precision = Some(value);
    }

    Ok((kind, options))
}

/// Fetch the required positional input
pub(crate) fn input_arg(args: &ArgMatches) -> CoordResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| CoordError::GenericError("Missing input".to_string()))
}
