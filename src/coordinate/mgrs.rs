//! MGRS grid reference structure

use std::fmt;
use std::str::FromStr;

use crate::errors::{CoordError, CoordResult};

/// A Military Grid Reference System reference
///
/// The numeric parts are kept as digit strings so that leading zeros and
/// the precision they imply survive a round trip through text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MgrsCoordinate {
    /// UTM zone number
    pub zone: u8,
    /// Latitude band letter
    pub band: char,
    /// 100 km square column letter
    pub column: char,
    /// 100 km square row letter
    pub row: char,
    /// Easting within the square, `precision` digits
    pub easting: String,
    /// Northing within the square, `precision` digits
    pub northing: String,
    /// Number of digits per axis, 0 to 5
    pub precision: u8,
}

impl MgrsCoordinate {
    /// Size of the referenced square in meters
    pub fn resolution(&self) -> f64 {
        10f64.powi(5 - self.precision as i32)
    }

    /// Render without any separators, e.g. `11SLB0628143881`
    pub fn to_compact_string(&self) -> String {
        format!("{}{}{}{}{}{}", self.zone, self.band, self.column, self.row, self.easting, self.northing)
    }

    /// Render with separators between the tokens, e.g. `11S LB 06281 43881`
    pub fn to_spaced_string(&self) -> String {
        let mut out = format!("{}{} {}{}", self.zone, self.band, self.column, self.row);
        if self.precision > 0 {
            out.push_str(&format!(" {} {}", self.easting, self.northing));
        }
        out
    }
}

impl fmt::Display for MgrsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_spaced_string())
    }
}

impl FromStr for MgrsCoordinate {
    type Err = CoordError;

    /// Parse a reference such as `11SLB0628143881` or `11S LB 06281 43881`.
    ///
    /// Only the structure is checked here; whether the square letters are
    /// legal for the zone is decided when decoding.
    fn from_str(text: &str) -> CoordResult<Self> {
        let cleaned: Vec<char> = text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let zone_len = cleaned.iter().take_while(|c| c.is_ascii_digit()).count();
        if zone_len == 0 || zone_len > 2 {
            return Err(malformed(text, "expected a one or two digit zone"));
        }
        let zone: u8 = cleaned[..zone_len].iter().collect::<String>().parse()
            .map_err(|_| malformed(text, "unreadable zone"))?;

        let letters = &cleaned[zone_len..];
        if letters.len() < 3 {
            return Err(malformed(text, "expected band and two square letters"));
        }
        let (band, column, row) = (letters[0], letters[1], letters[2]);
        if !(band.is_ascii_alphabetic() && column.is_ascii_alphabetic() && row.is_ascii_alphabetic()) {
            return Err(malformed(text, "grid letters must be alphabetic"));
        }

        let digits: String = letters[3..].iter().collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed(text, "numeric part contains non-digits"));
        }
        if digits.len() % 2 != 0 {
            return Err(malformed(text, "numeric part has an odd number of digits"));
        }
        if digits.len() > 10 {
            return Err(malformed(text, "more than five digits per axis"));
        }

        let precision = digits.len() / 2;
        let (easting, northing) = digits.split_at(precision);

        Ok(MgrsCoordinate {
            zone,
            band,
            column,
            row,
            easting: easting.to_string(),
            northing: northing.to_string(),
            precision: precision as u8,
        })
    }
}

fn malformed(text: &str, reason: &str) -> CoordError {
    CoordError::MalformedGridReference(format!("'{}': {}", text.trim(), reason))
}
