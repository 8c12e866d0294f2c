use log::info;

use crate::coordinate::{GeographicPoint, MgrsCoordinate, UtmCoordinate};
use crate::errors::CoordResult;
use crate::format::{CoordinateFormatter, FormatKind, FormatOptions};
use crate::geometry;
use crate::grid::GridReferenceEncoder;
use crate::parser::{CoordinateParser, ParseResult, ParsedCoordinate};
use crate::projection::GeodeticProjector;

/// Main interface to the CoordKit library
///
/// Holds no preferences: every call receives the format and options it
/// should use, so one instance can serve any number of callers.
pub struct CoordKit {
    projector: GeodeticProjector,
    encoder: GridReferenceEncoder,
    formatter: CoordinateFormatter,
    parser: CoordinateParser,
}

impl CoordKit {
    /// Create a new CoordKit instance
    pub fn new() -> Self {
        CoordKit {
            projector: GeodeticProjector::new(),
            encoder: GridReferenceEncoder::new(),
            formatter: CoordinateFormatter::new(),
            parser: CoordinateParser::new(),
        }
    }

    /// Render a point in the given format
    ///
    /// # Arguments
    /// * `point` - Point to render
    /// * `kind` - Target format
    /// * `options` - Compactness and precision
    pub fn format(&self, point: &GeographicPoint, kind: FormatKind, options: &FormatOptions) -> CoordResult<String> {
        self.formatter.format(point, kind, options)
    }

    /// Render a point in every format
    ///
    /// UTM and MGRS entries carry an error near the poles while the
    /// angular formats still succeed.
    pub fn format_all(&self, point: &GeographicPoint, options: &FormatOptions) -> Vec<(FormatKind, CoordResult<String>)> {
        FormatKind::ALL.iter()
            .map(|&kind| (kind, self.formatter.format(point, kind, options)))
            .collect()
    }

    /// Parse free text in any supported format
    pub fn parse(&self, text: &str) -> ParseResult {
        self.parser.parse(text)
    }

    /// Parse free text and report the format it was written in
    pub fn parse_detailed(&self, text: &str) -> CoordResult<ParsedCoordinate> {
        self.parser.parse_detailed(text)
    }

    /// Whether `text` is a valid coordinate in any supported format
    pub fn is_valid(&self, text: &str) -> bool {
        self.parser.is_valid(text)
    }

    /// Parse text and re-render it in another format
    ///
    /// # Returns
    /// The converted text, or the parse/format error
    pub fn convert(&self, text: &str, kind: FormatKind, options: &FormatOptions) -> CoordResult<String> {
        let parsed = self.parser.parse_detailed(text)?;
        let converted = self.formatter.format(&parsed.point, kind, options)?;
        info!("Converted {} '{}' to {} '{}'", parsed.format, text.trim(), kind, converted);
        Ok(converted)
    }

    /// Project a point to UTM
    pub fn to_utm(&self, point: &GeographicPoint) -> CoordResult<UtmCoordinate> {
        self.projector.forward_point(point)
    }

    /// Unproject a UTM coordinate
    pub fn from_utm(&self, utm: &UtmCoordinate) -> CoordResult<GeographicPoint> {
        self.projector.inverse_utm(utm)
    }

    /// Encode a point as an MGRS reference at the given precision
    pub fn to_mgrs(&self, point: &GeographicPoint, precision: u8) -> CoordResult<MgrsCoordinate> {
        let utm = self.projector.forward_point(point)?;
        self.encoder.encode(&utm, precision)
    }

    /// Decode an MGRS reference to the UTM corner of its square
    pub fn from_mgrs(&self, mgrs: &MgrsCoordinate) -> CoordResult<UtmCoordinate> {
        self.encoder.decode(mgrs)
    }

    /// Great-circle distance in statute miles
    pub fn distance(&self, from: &GeographicPoint, to: &GeographicPoint) -> f64 {
        geometry::distance(from, to)
    }

    /// Initial bearing in degrees, [0, 360)
    pub fn bearing(&self, from: &GeographicPoint, to: &GeographicPoint) -> f64 {
        geometry::bearing(from, to)
    }

    /// Nearest of the sixteen compass points
    pub fn bearing_to_compass(&self, degrees: f64) -> &'static str {
        geometry::bearing_to_compass(degrees)
    }

    /// Bearing as `045° (NE)`
    pub fn format_bearing(&self, degrees: f64) -> String {
        geometry::format_bearing(degrees)
    }

    /// The underlying projector
    pub fn projector(&self) -> &GeodeticProjector {
        &self.projector
    }

    /// The underlying grid reference encoder
    pub fn encoder(&self) -> &GridReferenceEncoder {
        &self.encoder
    }
}

impl Default for CoordKit {
    fn default() -> Self {
        CoordKit::new()
    }
}
