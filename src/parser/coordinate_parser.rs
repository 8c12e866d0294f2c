//! Priority-ordered coordinate parser

use log::{debug, warn};

use super::angle_recognizers::{SexagesimalRecognizer, SignedDecimalRecognizer};
use super::grid_recognizers::{MgrsRecognizer, UtmRecognizer};
use super::recognizer::CoordinateRecognizer;
use crate::coordinate::GeographicPoint;
use crate::errors::{CoordError, CoordResult};
use crate::format::FormatKind;

/// Outcome of parsing user text into a point
pub type ParseResult = CoordResult<GeographicPoint>;

/// A parsed point together with the format it was written in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedCoordinate {
    pub point: GeographicPoint,
    pub format: FormatKind,
}

/// Parser trying each recognizer from most to least structured
pub struct CoordinateParser {
    recognizers: Vec<Box<dyn CoordinateRecognizer>>,
}

impl CoordinateParser {
    /// Create a parser with the standard recognizer order:
    /// MGRS, UTM, DMS, DDM, hemisphere-tagged DD, signed DD pair
    pub fn new() -> Self {
        CoordinateParser {
            recognizers: vec![
                Box::new(MgrsRecognizer::new()),
                Box::new(UtmRecognizer::new()),
                Box::new(SexagesimalRecognizer::dms()),
                Box::new(SexagesimalRecognizer::ddm()),
                Box::new(SexagesimalRecognizer::hemisphere_decimal()),
                Box::new(SignedDecimalRecognizer::new()),
            ],
        }
    }

    /// Parse free text into a point
    pub fn parse(&self, text: &str) -> ParseResult {
        self.parse_detailed(text).map(|parsed| parsed.point)
    }

    /// Parse free text, also reporting which format matched
    ///
    /// The first recognizer whose pattern matches decides the result;
    /// later recognizers are not consulted even if it reports an error.
    pub fn parse_detailed(&self, text: &str) -> CoordResult<ParsedCoordinate> {
        let normalized = text.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CoordError::ParseFailure(text.to_string()));
        }

        for recognizer in &self.recognizers {
            if let Some(result) = recognizer.recognize(&normalized) {
                debug!("'{}' matched the {} recognizer", normalized, recognizer.name());
                return match result {
                    Ok(point) => Ok(ParsedCoordinate { point, format: recognizer.kind() }),
                    Err(e) => {
                        warn!("Rejected '{}': {}", text.trim(), e);
                        Err(e)
                    },
                };
            }
        }

        warn!("No coordinate format matches '{}'", text.trim());
        Err(CoordError::ParseFailure(text.trim().to_string()))
    }

    /// Whether `text` parses to a valid point
    pub fn is_valid(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }
}

impl Default for CoordinateParser {
    fn default() -> Self {
        CoordinateParser::new()
    }
}
