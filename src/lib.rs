pub mod errors;
pub mod coordinate;
pub mod projection;
pub mod grid;
pub mod format;
pub mod parser;
pub mod geometry;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CoordKit;

pub use errors::{CoordError, CoordResult};
pub use coordinate::{GeographicPoint, MgrsCoordinate, UtmCoordinate};
pub use projection::GeodeticProjector;
pub use grid::GridReferenceEncoder;
pub use format::{CoordinateFormatter, FormatKind, FormatOptions};
pub use parser::{CoordinateParser, ParsedCoordinate, ParseResult};
