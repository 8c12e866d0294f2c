//! Recognizers for latitude/longitude written as angles

use regex::{Captures, Regex};

use super::patterns::{
    DDM_PREFIXED, DDM_SUFFIXED, DD_PREFIXED, DD_SUFFIXED, DMS_PREFIXED, DMS_SUFFIXED, SIGNED_DECIMAL_PAIR,
};
use super::recognizer::CoordinateRecognizer;
use crate::coordinate::GeographicPoint;
use crate::errors::{CoordError, CoordResult};
use crate::format::FormatKind;

/// One angle as written: sign, sexagesimal parts and hemisphere letter
#[derive(Debug, Clone)]
struct Angle {
    negative: bool,
    parts: Vec<f64>,
    hemisphere: Option<char>,
}

impl Angle {
    fn is_latitude(&self) -> Option<bool> {
        match self.hemisphere {
            Some('N') | Some('S') => Some(true),
            Some('E') | Some('W') => Some(false),
            _ => None,
        }
    }

    /// Decimal degrees; `None` if minutes or seconds reach 60
    fn degrees(&self) -> Option<f64> {
        if self.parts.iter().skip(1).any(|part| *part >= 60.0) {
            return None;
        }
        let magnitude = self.parts.iter()
            .zip([1.0, 60.0, 3600.0])
            .map(|(part, divisor)| part / divisor)
            .sum::<f64>();
        Some(if self.negative { -magnitude } else { magnitude })
    }
}

/// Recognizer for DD with hemisphere letters, DDM and DMS
///
/// The number of sexagesimal parts selects the format. Each angle may carry
/// its hemisphere letter in front (`N 37 25.290`) or behind
/// (`37 25.290 N`); behind-style angles may use a sign instead, but not
/// a minus sign and a letter together.
pub struct SexagesimalRecognizer {
    kind: FormatKind,
    parts: usize,
    require_hemisphere: bool,
    prefixed: &'static Regex,
    suffixed: &'static Regex,
}

impl SexagesimalRecognizer {
    /// Degrees, minutes and seconds
    pub fn dms() -> Self {
        SexagesimalRecognizer {
            kind: FormatKind::DMS,
            parts: 3,
            require_hemisphere: false,
            prefixed: &DMS_PREFIXED,
            suffixed: &DMS_SUFFIXED,
        }
    }

    /// Degrees and decimal minutes
    pub fn ddm() -> Self {
        SexagesimalRecognizer {
            kind: FormatKind::DDM,
            parts: 2,
            require_hemisphere: false,
            prefixed: &DDM_PREFIXED,
            suffixed: &DDM_SUFFIXED,
        }
    }

    /// Decimal degrees tagged with hemisphere letters
    pub fn hemisphere_decimal() -> Self {
        SexagesimalRecognizer {
            kind: FormatKind::DD,
            parts: 1,
            require_hemisphere: true,
            prefixed: &DD_PREFIXED,
            suffixed: &DD_SUFFIXED,
        }
    }

    fn read_prefixed(&self, caps: &Captures) -> Option<[Angle; 2]> {
        let angle = |index: usize| {
            let base = 1 + index * (self.parts + 1);
            let hemisphere = letter(caps, base);
            Some(Angle {
                negative: matches!(hemisphere, Some('S') | Some('W')),
                parts: self.read_parts(caps, base + 1)?,
                hemisphere,
            })
        };
        Some([angle(0)?, angle(1)?])
    }

    /// A minus sign together with a hemisphere letter is a `ParseFailure`,
    /// whichever letter it is
    fn read_suffixed(&self, caps: &Captures, text: &str) -> Option<CoordResult<[Angle; 2]>> {
        let angle = |index: usize| -> Option<CoordResult<Angle>> {
            let base = 1 + index * (self.parts + 2);
            let hemisphere = letter(caps, base + self.parts + 1);
            let signed = caps.get(base).map_or(false, |m| m.as_str() == "-");
            if self.require_hemisphere && hemisphere.is_none() {
                return None;
            }
            let parts = self.read_parts(caps, base + 1)?;
            if signed && hemisphere.is_some() {
                return Some(Err(CoordError::ParseFailure(format!(
                    "{} (sign and hemisphere letter on one value)", text))));
            }
            Some(Ok(Angle {
                negative: signed || matches!(hemisphere, Some('S') | Some('W')),
                parts,
                hemisphere,
            }))
        };

        let first = angle(0)?;
        let second = angle(1)?;
        Some(first.and_then(|first| second.map(|second| [first, second])))
    }

    fn read_parts(&self, caps: &Captures, first: usize) -> Option<Vec<f64>> {
        (first..first + self.parts)
            .map(|group| caps.get(group)?.as_str().parse::<f64>().ok())
            .collect()
    }
}

impl CoordinateRecognizer for SexagesimalRecognizer {
    fn recognize(&self, text: &str) -> Option<CoordResult<GeographicPoint>> {
        let angles = if let Some(caps) = self.prefixed.captures(text) {
            self.read_prefixed(&caps)?
        } else {
            let caps = self.suffixed.captures(text)?;
            match self.read_suffixed(&caps, text)? {
                Ok(angles) => angles,
                Err(e) => return Some(Err(e)),
            }
        };

        Some(assemble(angles, text))
    }

    fn kind(&self) -> FormatKind {
        self.kind
    }

    fn name(&self) -> &'static str {
        match self.kind {
            FormatKind::DMS => "degrees-minutes-seconds",
            FormatKind::DDM => "degrees-decimal-minutes",
            _ => "hemisphere-decimal-degrees",
        }
    }
}

/// Recognizer for a bare `lat, lon` pair of signed decimal degrees
#[derive(Debug, Default)]
pub struct SignedDecimalRecognizer;

impl SignedDecimalRecognizer {
    pub fn new() -> Self {
        SignedDecimalRecognizer
    }
}

impl CoordinateRecognizer for SignedDecimalRecognizer {
    fn recognize(&self, text: &str) -> Option<CoordResult<GeographicPoint>> {
        let caps = SIGNED_DECIMAL_PAIR.captures(text)?;
        let latitude = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let longitude = caps.get(2)?.as_str().parse::<f64>().ok()?;

        Some(validate(latitude, longitude))
    }

    fn kind(&self) -> FormatKind {
        FormatKind::DD
    }

    fn name(&self) -> &'static str {
        "signed-decimal-degrees"
    }
}

/// Order the two angles by their hemisphere letters and range-check them
fn assemble(angles: [Angle; 2], text: &str) -> CoordResult<GeographicPoint> {
    let [first, second] = angles;
    let (lat, lon) = match (first.is_latitude(), second.is_latitude()) {
        (Some(a), Some(b)) if a == b => {
            return Err(CoordError::ParseFailure(format!("{} (both values on one axis)", text)));
        },
        (Some(false), _) | (_, Some(true)) => (second, first),
        _ => (first, second),
    };

    match (lat.degrees(), lon.degrees()) {
        (Some(latitude), Some(longitude)) => validate(latitude, longitude),
        (latitude, longitude) => Err(CoordError::OutOfRange {
            latitude: latitude.unwrap_or(f64::NAN),
            longitude: longitude.unwrap_or(f64::NAN),
        }),
    }
}

/// Every recognized point must lie on the globe
pub(super) fn validate(latitude: f64, longitude: f64) -> CoordResult<GeographicPoint> {
    let point = GeographicPoint::new(latitude, longitude);
    if point.is_in_range() {
        Ok(point)
    } else {
        Err(CoordError::OutOfRange { latitude, longitude })
    }
}

fn letter(caps: &Captures, group: usize) -> Option<char> {
    caps.get(group).and_then(|m| m.as_str().chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(point: &GeographicPoint, lat: f64, lon: f64) -> bool {
        (point.latitude - lat).abs() < 1e-9 && (point.longitude - lon).abs() < 1e-9
    }

    #[test]
    fn test_dms_forms() {
        let dms = SexagesimalRecognizer::dms();
        let expected = (37.0 + 25.0 / 60.0 + 17.4 / 3600.0, -(119.0 + 11.0 / 60.0 + 21.1 / 3600.0));

        for text in ["37° 25' 17.4\" N, 119° 11' 21.1\" W",
                     "37°25'17.4\"N 119°11'21.1\"W",
                     "N 37 25 17.4 W 119 11 21.1",
                     "37 25 17.4, -119 11 21.1",
                     "119°11'21.1\"W 37°25'17.4\"N"] {
            let point = dms.recognize(text).unwrap().unwrap();
            assert!(close(&point, expected.0, expected.1), "{} -> {:?}", text, point);
        }
    }

    #[test]
    fn test_ddm_forms() {
        let ddm = SexagesimalRecognizer::ddm();
        let point = ddm.recognize("37° 25.290' N, 119° 11.352' W").unwrap().unwrap();
        assert!(close(&point, 37.4215, -119.1892));
        let point = ddm.recognize("S33 52.128 E151 12.558").unwrap().unwrap();
        assert!(close(&point, -(33.0 + 52.128 / 60.0), 151.0 + 12.558 / 60.0));
    }

    #[test]
    fn test_hemisphere_decimal_needs_letters() {
        let dd = SexagesimalRecognizer::hemisphere_decimal();
        let point = dd.recognize("37.4215° N, 119.1892° W").unwrap().unwrap();
        assert!(close(&point, 37.4215, -119.1892));
        assert!(dd.recognize("37.4215, -119.1892").is_none());
        assert!(dd.recognize("37.4215 N, 119.1892").is_none());
    }

    #[test]
    fn test_same_axis_rejected() {
        let dd = SexagesimalRecognizer::hemisphere_decimal();
        assert!(matches!(dd.recognize("37.4 N, 12.1 S"), Some(Err(CoordError::ParseFailure(_)))));
    }

    #[test]
    fn test_sign_with_hemisphere_letter_rejected() {
        let cases = [
            (SexagesimalRecognizer::dms(), "-37 25 17.4 N, 119 11 21.1 W"),
            (SexagesimalRecognizer::ddm(), "-37 25.290 N, 119 11.352 W"),
            (SexagesimalRecognizer::ddm(), "37 25.290 N, -119 11.352 W"),
            (SexagesimalRecognizer::hemisphere_decimal(), "-37.4215 N, 119.1892 W"),
            (SexagesimalRecognizer::hemisphere_decimal(), "-37.4215 S, 119.1892 W"),
        ];

        for (recognizer, text) in cases {
            assert!(matches!(recognizer.recognize(text), Some(Err(CoordError::ParseFailure(_)))), "{}", text);
        }

        let point = SexagesimalRecognizer::hemisphere_decimal().recognize("+37.4215 N, 119.1892 W").unwrap().unwrap();
        assert!(close(&point, 37.4215, -119.1892));
    }

    #[test]
    fn test_minutes_out_of_range() {
        let ddm = SexagesimalRecognizer::ddm();
        assert!(matches!(ddm.recognize("37 75.5 N, 119 11.3 W"), Some(Err(CoordError::OutOfRange { .. }))));
        let dms = SexagesimalRecognizer::dms();
        assert!(matches!(dms.recognize("37 25 61 N, 119 11 21 W"), Some(Err(CoordError::OutOfRange { .. }))));
    }

    #[test]
    fn test_signed_pair() {
        let signed = SignedDecimalRecognizer::new();
        let point = signed.recognize("-33.8688, 151.2093").unwrap().unwrap();
        assert!(close(&point, -33.8688, 151.2093));
        assert!(matches!(signed.recognize("95.0, 10.0"), Some(Err(CoordError::OutOfRange { .. }))));
        assert!(matches!(signed.recognize("45.0 -200.5"), Some(Err(CoordError::OutOfRange { .. }))));
        assert!(signed.recognize("NOT A COORDINATE").is_none());
    }
}
