//! Free-text coordinate parsing
//!
//! Recognizers are tried from the most structured format to the least;
//! the first one whose pattern matches decides the outcome.

mod recognizer;
mod patterns;
mod grid_recognizers;
mod angle_recognizers;
mod coordinate_parser;

pub use self::recognizer::CoordinateRecognizer;
pub use self::grid_recognizers::{MgrsRecognizer, UtmRecognizer};
pub use self::angle_recognizers::{SexagesimalRecognizer, SignedDecimalRecognizer};
pub use self::coordinate_parser::{CoordinateParser, ParsedCoordinate, ParseResult};

#[cfg(test)]
mod tests;
