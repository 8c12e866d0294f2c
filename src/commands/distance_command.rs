//! Distance and bearing command

use clap::ArgMatches;
use log::info;

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::commands::input_arg;
use crate::coordinate::GeographicPoint;
use crate::errors::{CoordError, CoordResult};
use crate::geometry;

/// Command printing the great-circle distance and initial bearing
pub struct DistanceCommand {
    /// Starting point
    from: GeographicPoint,
    /// Destination point
    to: GeographicPoint,
}

impl DistanceCommand {
    /// Create a new distance command
    ///
    /// Both points may be written in any supported format.
    pub fn new(args: &ArgMatches) -> CoordResult<Self> {
        let kit = CoordKit::new();
        let from = kit.parse(&input_arg(args)?)?;
        let to_text = args.get_one::<String>("distance")
            .ok_or_else(|| CoordError::GenericError("Missing destination for --distance".to_string()))?;
        let to = kit.parse(to_text)?;

        Ok(DistanceCommand { from, to })
    }

    /// Produce the output lines without printing them
    pub fn render(&self) -> Vec<String> {
        let miles = geometry::distance(&self.from, &self.to);
        let kilometers = geometry::distance_km(&self.from, &self.to);
        let bearing = geometry::bearing(&self.from, &self.to);

        info!("Distance from {} to {}: {:.3} mi", self.from, self.to, miles);

        vec![
            format!("Distance: {:.2} mi ({:.2} km)", miles, kilometers),
            format!("Bearing:  {}", geometry::format_bearing(bearing)),
        ]
    }
}

impl Command for DistanceCommand {
    fn execute(&self) -> CoordResult<()> {
        for line in self.render() {
            println!("{}", line);
        }
        Ok(())
    }
}
