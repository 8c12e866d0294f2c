//! Batch conversion command
//!
//! Converts a file with one coordinate per line. Blank lines and lines
//! starting with `#` are skipped; lines that fail to parse are reported
//! with their error kind and do not stop the run.

use std::fs;

use clap::ArgMatches;
use log::{info, warn};

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::commands::{input_arg, output_settings};
use crate::config::AppConfig;
use crate::errors::CoordResult;
use crate::format::{FormatKind, FormatOptions};
use crate::utils::progress::ProgressTracker;

/// Counts from one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: usize,
    pub rejected: usize,
}

/// Command for converting every line of a file
pub struct BatchCommand {
    /// File with one coordinate per line
    input_file: String,
    /// Target format
    target: FormatKind,
    /// Formatting options
    options: FormatOptions,
    /// Library entry point
    kit: CoordKit,
}

impl BatchCommand {
    /// Create a new batch command
    pub fn new(args: &ArgMatches, config: &AppConfig) -> CoordResult<Self> {
        let input_file = input_arg(args)?;
        let (target, options) = output_settings(args, config)?;

        Ok(BatchCommand {
            input_file,
            target,
            options,
            kit: CoordKit::new(),
        })
    }

    /// Convert each line, returning the output lines and the counts
    ///
    /// # Arguments
    /// * `lines` - Input lines
    /// * `progress` - Tracker advanced once per coordinate line
    pub fn convert_lines<'l, I>(&self, lines: I, progress: &ProgressTracker) -> (Vec<String>, BatchReport)
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut output = Vec::new();
        let mut report = BatchReport::default();

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match self.kit.convert(trimmed, self.target, &self.options) {
                Ok(converted) => {
                    output.push(converted);
                    report.converted += 1;
                },
                Err(e) => {
                    warn!("Skipping '{}': {}", trimmed, e);
                    output.push(format!("! {} ({})", trimmed, e.kind_name()));
                    report.rejected += 1;
                },
            }
            progress.increment(1);
        }

        (output, report)
    }
}

impl Command for BatchCommand {
    fn execute(&self) -> CoordResult<()> {
        info!("Converting {} to {}", self.input_file, self.target);
        let contents = fs::read_to_string(&self.input_file)?;

        let total = contents.lines()
            .filter(|line| !line.trim().is_empty() && !line.trim().starts_with('#'))
            .count();
        let progress = ProgressTracker::new(total as u64, "Converting coordinates");

        let (output, report) = self.convert_lines(contents.lines(), &progress);
        progress.finish(&format!("{} converted, {} rejected", report.converted, report.rejected));

        for line in output {
            println!("{}", line);
        }

        info!("Batch complete: {} converted, {} rejected", report.converted, report.rejected);
        Ok(())
    }
}
