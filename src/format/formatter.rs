//! Coordinate formatter

use log::debug;

use super::kind::FormatKind;
use super::options::FormatOptions;
use crate::coordinate::GeographicPoint;
use crate::errors::CoordResult;
use crate::grid::GridReferenceEncoder;
use crate::projection::GeodeticProjector;

// Keeps the integer arithmetic below well inside f64's exact range
const MAX_ANGLE_PRECISION: u8 = 8;
const MAX_METER_PRECISION: u8 = 3;

/// Which axis a value belongs to, for the hemisphere letter
#[derive(Debug, Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere letter; values that round to zero are north/east
    fn hemisphere(&self, value: f64, rounds_to_zero: bool) -> char {
        let negative = value < 0.0 && !rounds_to_zero;
        match (self, negative) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }
}

/// Renders points in any [`FormatKind`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateFormatter {
    projector: GeodeticProjector,
    encoder: GridReferenceEncoder,
}

impl CoordinateFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        CoordinateFormatter {
            projector: GeodeticProjector::new(),
            encoder: GridReferenceEncoder::new(),
        }
    }

    /// Format a point
    ///
    /// # Arguments
    /// * `point` - The point to render
    /// * `kind` - Target format
    /// * `options` - Compactness and precision
    ///
    /// # Returns
    /// The rendered text, or an error when the point is off the globe or
    /// outside the UTM domain for UTM/MGRS output
    pub fn format(&self, point: &GeographicPoint, kind: FormatKind, options: &FormatOptions) -> CoordResult<String> {
        let point = GeographicPoint::checked(point.latitude, point.longitude)?;
        let precision = options.precision_for(kind);

        let text = match kind {
            FormatKind::DD => self.format_dd(&point, precision, options.compact),
            FormatKind::DMS => self.format_dms(&point, precision, options.compact),
            FormatKind::DDM => self.format_ddm(&point, precision, options.compact),
            FormatKind::UTM => self.format_utm(&point, precision, options.compact)?,
            FormatKind::MGRS => self.format_mgrs(&point, precision, options.compact)?,
        };

        debug!("format ({}) as {} -> {}", point, kind, text);
        Ok(text)
    }

    fn format_dd(&self, point: &GeographicPoint, precision: u8, compact: bool) -> String {
        let precision = precision.min(MAX_ANGLE_PRECISION);
        let render = |value: f64, axis: Axis| {
            let (units, scale) = to_units(value.abs(), 1.0, precision);
            let hemisphere = axis.hemisphere(value, units == 0);
            let degrees = units as f64 / scale as f64;
            if compact {
                format!("{:.*}°{}", precision as usize, degrees, hemisphere)
            } else {
                format!("{:.*}° {}", precision as usize, degrees, hemisphere)
            }
        };

        join(render(point.latitude, Axis::Latitude), render(point.longitude, Axis::Longitude), compact)
    }

    fn format_dms(&self, point: &GeographicPoint, precision: u8, compact: bool) -> String {
        let precision = precision.min(MAX_ANGLE_PRECISION);
        let render = |value: f64, axis: Axis| {
            let (units, scale) = to_units(value.abs(), 3600.0, precision);
            let hemisphere = axis.hemisphere(value, units == 0);
            let degrees = units / (3600 * scale);
            let minutes = units % (3600 * scale) / (60 * scale);
            let seconds = (units % (60 * scale)) as f64 / scale as f64;
            if compact {
                format!("{}°{}'{:.*}\"{}", degrees, minutes, precision as usize, seconds, hemisphere)
            } else {
                format!("{}° {}' {:.*}\" {}", degrees, minutes, precision as usize, seconds, hemisphere)
            }
        };

        join(render(point.latitude, Axis::Latitude), render(point.longitude, Axis::Longitude), compact)
    }

    fn format_ddm(&self, point: &GeographicPoint, precision: u8, compact: bool) -> String {
        let precision = precision.min(MAX_ANGLE_PRECISION);
        let render = |value: f64, axis: Axis| {
            let (units, scale) = to_units(value.abs(), 60.0, precision);
            let hemisphere = axis.hemisphere(value, units == 0);
            let degrees = units / (60 * scale);
            let minutes = (units % (60 * scale)) as f64 / scale as f64;
            if compact {
                format!("{}°{:.*}'{}", degrees, precision as usize, minutes, hemisphere)
            } else {
                format!("{}° {:.*}' {}", degrees, precision as usize, minutes, hemisphere)
            }
        };

        join(render(point.latitude, Axis::Latitude), render(point.longitude, Axis::Longitude), compact)
    }

    fn format_utm(&self, point: &GeographicPoint, precision: u8, compact: bool) -> CoordResult<String> {
        let precision = precision.min(MAX_METER_PRECISION) as usize;
        let utm = self.projector.forward_point(point)?;

        Ok(if compact {
            format!("{}{} {:.*} {:.*}", utm.zone, utm.band, precision, utm.easting, precision, utm.northing)
        } else {
            format!("{}{} {:.*}E {:.*}N", utm.zone, utm.band, precision, utm.easting, precision, utm.northing)
        })
    }

    fn format_mgrs(&self, point: &GeographicPoint, precision: u8, compact: bool) -> CoordResult<String> {
        let utm = self.projector.forward_point(point)?;
        let mgrs = self.encoder.encode(&utm, precision)?;

        Ok(if compact {
            mgrs.to_compact_string()
        } else {
            mgrs.to_spaced_string()
        })
    }
}

/// Express `value * per_degree` as an integer count of the last printed digit
fn to_units(value: f64, per_degree: f64, precision: u8) -> (u64, u64) {
    let scale = 10u64.pow(precision as u32);
    ((value * per_degree * scale as f64).round() as u64, scale)
}

fn join(latitude: String, longitude: String, compact: bool) -> String {
    if compact {
        format!("{} {}", latitude, longitude)
    } else {
        format!("{}, {}", latitude, longitude)
    }
}
