//! Conversion between UTM coordinates and MGRS references
//!
//! Column letters cycle through three eight-letter sets every three zones,
//! row letters through twenty letters with even zones shifted by five, so
//! that neighbouring zones never share a square designator.
//!
//! A reference only pins the northing to within 2,000 km on its own; the
//! band letter carried in the reference resolves which cycle is meant.

use log::debug;

use crate::coordinate::{MgrsCoordinate, UtmCoordinate};
use crate::errors::{CoordError, CoordResult};
use crate::projection::zones;

/// Finest supported precision, 1 m squares
pub const MAX_PRECISION: u8 = 5;

const SQUARE_SIZE: f64 = 100_000.0;
const ROW_CYCLE: f64 = 2_000_000.0;

const COLUMN_SETS: [&[u8; 8]; 3] = [b"ABCDEFGH", b"JKLMNPQR", b"STUVWXYZ"];
const ROW_LETTERS: &[u8; 20] = b"ABCDEFGHJKLMNPQRSTUV";

/// Encoder between UTM and MGRS
#[derive(Debug, Clone, Copy, Default)]
pub struct GridReferenceEncoder;

impl GridReferenceEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        GridReferenceEncoder
    }

    /// Encode a UTM coordinate as an MGRS reference
    ///
    /// Easting and northing are truncated, not rounded, to the requested
    /// number of digits. `precision` is clamped to 0..=5.
    pub fn encode(&self, utm: &UtmCoordinate, precision: u8) -> CoordResult<MgrsCoordinate> {
        let zone = zones::validate_zone(utm.zone)?;
        if !UtmCoordinate::is_valid_band(utm.band) {
            return Err(CoordError::InvalidBand(utm.band));
        }
        let precision = precision.min(MAX_PRECISION);

        let column_index = (utm.easting / SQUARE_SIZE).floor() as i64 - 1;
        let column_set = column_set(zone);
        if !(0..column_set.len() as i64).contains(&column_index) {
            return Err(CoordError::MalformedGridReference(format!(
                "easting {} lies outside the zone's grid columns", utm.easting)));
        }
        let column = column_set[column_index as usize] as char;

        if utm.northing < 0.0 {
            return Err(CoordError::MalformedGridReference(format!(
                "negative northing {}", utm.northing)));
        }
        let row_index = ((utm.northing / SQUARE_SIZE).floor() as usize + row_offset(zone)) % ROW_LETTERS.len();
        let row = ROW_LETTERS[row_index] as char;

        let easting = truncate_digits(utm.easting, precision);
        let northing = truncate_digits(utm.northing, precision);

        debug!("encode {} at precision {} -> {}{}{}{} {} {}",
               utm, precision, zone, utm.band, column, row, easting, northing);

        Ok(MgrsCoordinate {
            zone,
            band: utm.band.to_ascii_uppercase(),
            column,
            row,
            easting,
            northing,
            precision,
        })
    }

    /// Decode an MGRS reference to the south-west corner of its square
    pub fn decode(&self, mgrs: &MgrsCoordinate) -> CoordResult<UtmCoordinate> {
        let zone = zones::validate_zone(mgrs.zone)
            .map_err(|_| malformed(mgrs, "zone outside 1..60"))?;
        let band = mgrs.band.to_ascii_uppercase();
        if !UtmCoordinate::is_valid_band(band) {
            return Err(malformed(mgrs, "invalid band letter"));
        }
        if mgrs.precision > MAX_PRECISION
            || mgrs.easting.len() != mgrs.precision as usize
            || mgrs.northing.len() != mgrs.precision as usize
        {
            return Err(malformed(mgrs, "digit count does not match precision"));
        }

        let column = mgrs.column.to_ascii_uppercase();
        let column_index = column_set(zone).iter()
            .position(|&c| c as char == column)
            .ok_or_else(|| malformed(mgrs, "column letter not used in this zone"))?;
        let east_square = (column_index + 1) as f64 * SQUARE_SIZE;

        let row = mgrs.row.to_ascii_uppercase();
        let row_position = ROW_LETTERS.iter()
            .position(|&c| c as char == row)
            .ok_or_else(|| malformed(mgrs, "row letter not used in this zone"))?;
        let row_index = (row_position + ROW_LETTERS.len() - row_offset(zone)) % ROW_LETTERS.len();

        let mut north_square = row_index as f64 * SQUARE_SIZE;
        let floor = band_min_northing(band);
        while north_square < floor {
            north_square += ROW_CYCLE;
        }

        let scale = mgrs.resolution();
        let easting = east_square + digits_value(&mgrs.easting, mgrs)? * scale;
        let northing = north_square + digits_value(&mgrs.northing, mgrs)? * scale;

        debug!("decode {} -> E {} N {}", mgrs, easting, northing);

        Ok(UtmCoordinate::new(zone, band, easting, northing))
    }
}

fn column_set(zone: u8) -> &'static [u8; 8] {
    COLUMN_SETS[(zone as usize - 1) % 3]
}

fn row_offset(zone: u8) -> usize {
    if zone % 2 == 0 { 5 } else { 0 }
}

/// Lowest northing, rounded down to a 100 km square, found in each band
fn band_min_northing(band: char) -> f64 {
    match band {
        'C' => 1_100_000.0,
        'D' => 2_000_000.0,
        'E' => 2_800_000.0,
        'F' => 3_700_000.0,
        'G' => 4_600_000.0,
        'H' => 5_500_000.0,
        'J' => 6_400_000.0,
        'K' => 7_300_000.0,
        'L' => 8_200_000.0,
        'M' => 9_100_000.0,
        'N' => 0.0,
        'P' => 800_000.0,
        'Q' => 1_700_000.0,
        'R' => 2_600_000.0,
        'S' => 3_500_000.0,
        'T' => 4_400_000.0,
        'U' => 5_300_000.0,
        'V' => 6_200_000.0,
        'W' => 7_000_000.0,
        _ => 7_900_000.0,
    }
}

fn truncate_digits(value: f64, precision: u8) -> String {
    if precision == 0 {
        return String::new();
    }
    let within_square = value.floor() as u64 % SQUARE_SIZE as u64;
    let truncated = within_square / 10u64.pow((MAX_PRECISION - precision) as u32);
    format!("{:0width$}", truncated, width = precision as usize)
}

fn digits_value(digits: &str, mgrs: &MgrsCoordinate) -> CoordResult<f64> {
    if digits.is_empty() {
        return Ok(0.0);
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed(mgrs, "numeric part contains non-digits"));
    }
    digits.parse::<u32>()
        .map(f64::from)
        .map_err(|_| malformed(mgrs, "unreadable numeric part"))
}

fn malformed(mgrs: &MgrsCoordinate, reason: &str) -> CoordError {
    CoordError::MalformedGridReference(format!("'{}': {}", mgrs.to_compact_string(), reason))
}
