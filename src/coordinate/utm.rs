//! UTM coordinate structure

use std::fmt;

/// Latitude band letters from 80°S northwards, 8° each (X spans 12°)
pub const BAND_LETTERS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

/// A position inside one UTM zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoordinate {
    /// Zone number, 1 to 60
    pub zone: u8,
    /// Latitude band letter
    pub band: char,
    /// Meters east, including the 500,000 m false easting
    pub easting: f64,
    /// Meters north, including the 10,000,000 m false northing in the south
    pub northing: f64,
}

impl UtmCoordinate {
    /// Create a new UTM coordinate
    pub fn new(zone: u8, band: char, easting: f64, northing: f64) -> Self {
        UtmCoordinate { zone, band, easting, northing }
    }

    /// Whether the band letter marks the northern hemisphere.
    ///
    /// Bands `N` and later are north; the equator itself belongs to band `N`.
    pub fn is_northern(&self) -> bool {
        self.band.to_ascii_uppercase() >= 'N'
    }

    /// Whether `band` is one of the twenty valid band letters
    pub fn is_valid_band(band: char) -> bool {
        band.is_ascii() && BAND_LETTERS.contains(&(band.to_ascii_uppercase() as u8))
    }
}

impl fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {:.0}E {:.0}N", self.zone, self.band, self.easting, self.northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_from_band() {
        assert!(UtmCoordinate::new(31, 'N', 166_021.0, 0.0).is_northern());
        assert!(UtmCoordinate::new(31, 'X', 500_000.0, 9_000_000.0).is_northern());
        assert!(!UtmCoordinate::new(31, 'M', 500_000.0, 9_999_000.0).is_northern());
        assert!(!UtmCoordinate::new(1, 'C', 441_488.0, 1_128_072.0).is_northern());
    }

    #[test]
    fn test_band_validation() {
        assert!(UtmCoordinate::is_valid_band('S'));
        assert!(UtmCoordinate::is_valid_band('s'));
        assert!(!UtmCoordinate::is_valid_band('I'));
        assert!(!UtmCoordinate::is_valid_band('O'));
        assert!(!UtmCoordinate::is_valid_band('A'));
        assert!(!UtmCoordinate::is_valid_band('Y'));
    }
}
