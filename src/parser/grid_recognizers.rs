//! Recognizers for projected grid formats

use super::angle_recognizers::validate;
use super::patterns::{MGRS_PATTERN, UTM_PATTERN};
use super::recognizer::CoordinateRecognizer;
use crate::coordinate::{GeographicPoint, MgrsCoordinate, UtmCoordinate};
use crate::errors::{CoordError, CoordResult};
use crate::format::FormatKind;
use crate::grid::GridReferenceEncoder;
use crate::projection::{GeodeticProjector, GridCell};

/// Recognizer for MGRS references such as `11SLB0628143881`
///
/// A reference names a square rather than a point; the parsed location
/// is the centre of that square, or of its part inside the reference's
/// zone and band when a zone or band edge cuts the square.
#[derive(Debug, Default)]
pub struct MgrsRecognizer {
    projector: GeodeticProjector,
    encoder: GridReferenceEncoder,
}

impl MgrsRecognizer {
    pub fn new() -> Self {
        MgrsRecognizer::default()
    }

    fn read(&self, text: &str, easting: &str, northing: &str) -> CoordResult<GeographicPoint> {
        if !northing.is_empty() && easting.len() != northing.len() {
            return Err(CoordError::MalformedGridReference(format!(
                "'{}': easting and northing differ in length", text)));
        }

        let mgrs: MgrsCoordinate = text.parse()?;
        let corner = self.encoder.decode(&mgrs)?;
        let cell = GridCell::square(&corner, mgrs.resolution());

        let point = self.projector.inverse_within(&cell)?;
        validate(point.latitude, point.longitude)
    }
}

impl CoordinateRecognizer for MgrsRecognizer {
    fn recognize(&self, text: &str) -> Option<CoordResult<GeographicPoint>> {
        let caps = MGRS_PATTERN.captures(text)?;
        let easting = caps.get(5).map_or("", |m| m.as_str());
        let northing = caps.get(6).map_or("", |m| m.as_str());

        Some(self.read(text, easting, northing))
    }

    fn kind(&self) -> FormatKind {
        FormatKind::MGRS
    }

    fn name(&self) -> &'static str {
        "mgrs"
    }
}

/// Recognizer for UTM positions such as `11S 306282E 4143882N`
///
/// A value written next to a zone edge may round across it; the parsed
/// point then moves back inside the written zone and band while still
/// rounding to the written easting and northing.
#[derive(Debug, Default)]
pub struct UtmRecognizer {
    projector: GeodeticProjector,
}

impl UtmRecognizer {
    pub fn new() -> Self {
        UtmRecognizer::default()
    }
}

impl CoordinateRecognizer for UtmRecognizer {
    fn recognize(&self, text: &str) -> Option<CoordResult<GeographicPoint>> {
        let caps = UTM_PATTERN.captures(text)?;
        let zone = caps.get(1)?.as_str().parse::<u8>().ok()?;
        let band = caps.get(2)?.as_str().chars().next()?;
        let easting_text = caps.get(3)?.as_str();
        let northing_text = caps.get(4)?.as_str();
        let easting = easting_text.parse::<f64>().ok()?;
        let northing = northing_text.parse::<f64>().ok()?;

        let decimals = decimal_places(easting_text).min(decimal_places(northing_text));
        let written = UtmCoordinate::new(zone, band.to_ascii_uppercase(), easting, northing);
        Some(self.projector.inverse_within(&GridCell::rounded(&written, decimals))
            .and_then(|point| validate(point.latitude, point.longitude)))
    }

    fn kind(&self) -> FormatKind {
        FormatKind::UTM
    }

    fn name(&self) -> &'static str {
        "utm"
    }
}

fn decimal_places(number: &str) -> usize {
    number.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}
