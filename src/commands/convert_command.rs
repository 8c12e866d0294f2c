//! Coordinate conversion command
//!
//! This module implements the command for reading one coordinate in any
//! supported format and printing it in another.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::commands::{input_arg, output_settings};
use crate::config::AppConfig;
use crate::errors::CoordResult;
use crate::format::{FormatKind, FormatOptions};

/// Command for converting a single coordinate
pub struct ConvertCommand {
    /// Coordinate text as typed
    input: String,
    /// Target format
    target: FormatKind,
    /// Formatting options
    options: FormatOptions,
    /// Print every format instead of only the target
    all_formats: bool,
    /// Library entry point
    kit: CoordKit,
}

impl ConvertCommand {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Configuration supplying the default format
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, config: &AppConfig) -> CoordResult<Self> {
        let input = input_arg(args)?;
        let (target, options) = output_settings(args, config)?;

        Ok(ConvertCommand {
            input,
            target,
            options,
            all_formats: args.get_flag("all"),
            kit: CoordKit::new(),
        })
    }

    /// Produce the output lines without printing them
    pub fn render(&self) -> CoordResult<Vec<String>> {
        let parsed = self.kit.parse_detailed(&self.input)?;
        info!("Read {} coordinate {}", parsed.format, parsed.point);

        if !self.all_formats {
            return Ok(vec![self.kit.format(&parsed.point, self.target, &self.options)?]);
        }

        let lines = self.kit.format_all(&parsed.point, &self.options)
            .into_iter()
            .map(|(kind, result)| match result {
                Ok(text) => format!("{:<5} {}", kind.to_string(), text),
                Err(e) => {
                    warn!("{} unavailable: {}", kind, e);
                    format!("{:<5} ({})", kind.to_string(), e)
                },
            })
            .collect();

        Ok(lines)
    }
}

impl Command for ConvertCommand {
    fn execute(&self) -> CoordResult<()> {
        for line in self.render()? {
            println!("{}", line);
        }
        Ok(())
    }
}
