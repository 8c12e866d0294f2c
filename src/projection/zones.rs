//! UTM zone and latitude band selection

use crate::coordinate::BAND_LETTERS;
use crate::errors::{CoordError, CoordResult};

/// Southern limit of the UTM domain
pub const MIN_UTM_LATITUDE: f64 = -80.0;

/// Northern limit of the UTM domain
pub const MAX_UTM_LATITUDE: f64 = 84.0;

/// Bring a longitude in [-180, 180] into [-180, 180).
///
/// Both spellings of the antimeridian land in zone 1.
pub fn normalize_longitude(lon: f64) -> f64 {
    if lon >= 180.0 {
        lon - 360.0
    } else {
        lon
    }
}

/// Zone number for a point, including the Norway and Svalbard exceptions
///
/// `lon` must already be normalized into [-180, 180).
pub fn zone_number(lat: f64, lon: f64) -> u8 {
    // Southwest Norway: zone 32 is widened to cover 3°E..12°E
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }

    // Svalbard: only the odd zones 31..37 are used
    if (72.0..84.0).contains(&lat) && (0.0..42.0).contains(&lon) {
        return if lon < 9.0 {
            31
        } else if lon < 21.0 {
            33
        } else if lon < 33.0 {
            35
        } else {
            37
        };
    }

    let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
    zone.clamp(1, 60) as u8
}

/// Latitude band letter for a latitude inside the UTM domain
pub fn band_letter(lat: f64) -> CoordResult<char> {
    if !(MIN_UTM_LATITUDE..=MAX_UTM_LATITUDE).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }

    // X is 12° tall, so 84° folds back into the last band
    let index = ((lat - MIN_UTM_LATITUDE) / 8.0).floor() as usize;
    Ok(BAND_LETTERS[index.min(BAND_LETTERS.len() - 1)] as char)
}

/// Southern and northern edge of a latitude band
pub fn band_latitudes(band: char) -> Option<(f64, f64)> {
    let band = band.to_ascii_uppercase();
    let index = BAND_LETTERS.iter().position(|&letter| letter as char == band)?;
    let south = MIN_UTM_LATITUDE + 8.0 * index as f64;
    let north = if index == BAND_LETTERS.len() - 1 { MAX_UTM_LATITUDE } else { south + 8.0 };
    Some((south, north))
}

/// Western and eastern edge of a zone inside one band
///
/// Band V holds the Norway exception and band X the Svalbard one, so the
/// edges are constant across a band. `None` for zones 32, 34 and 36 in
/// band X, which are not used.
pub fn zone_longitudes(zone: u8, band: char) -> Option<(f64, f64)> {
    match (band.to_ascii_uppercase(), zone) {
        ('V', 31) => Some((0.0, 3.0)),
        ('V', 32) => Some((3.0, 12.0)),
        ('X', 31) => Some((0.0, 9.0)),
        ('X', 33) => Some((9.0, 21.0)),
        ('X', 35) => Some((21.0, 33.0)),
        ('X', 37) => Some((33.0, 42.0)),
        ('X', 32) | ('X', 34) | ('X', 36) => None,
        _ => {
            let zone = validate_zone(zone).ok()?;
            let west = central_meridian(zone) - 3.0;
            Some((west, west + 6.0))
        }
    }
}

/// Longitude of a zone's central meridian in degrees
pub fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// Signed distance in degrees from a zone's central meridian, in [-180, 180)
pub fn longitude_offset(lon: f64, zone: u8) -> f64 {
    (lon - central_meridian(zone) + 180.0).rem_euclid(360.0) - 180.0
}

/// Reject zones outside 1..=60
pub fn validate_zone(zone: u8) -> CoordResult<u8> {
    if (1..=60).contains(&zone) {
        Ok(zone)
    } else {
        Err(CoordError::InvalidZone(zone))
    }
}
