//! Regular expressions shared by the recognizers

use lazy_static::lazy_static;
use regex::Regex;

// Numeric bodies of one angle; each capture group is one sexagesimal part
const DD_BODY: &str = r"(\d{1,3}(?:\.\d+)?)\s*[°º]?";
const DDM_BODY: &str = r"(\d{1,3})\s*(?:°|º|\s)\s*(\d{1,2}(?:\.\d+)?)\s*(?:'|′|’)?";
const DMS_BODY: &str = r#"(\d{1,3})\s*(?:°|º|\s)\s*(\d{1,2})\s*(?:'|′|’|\s)\s*(\d{1,2}(?:\.\d+)?)\s*(?:"|″|”|'')?"#;

lazy_static! {
    pub static ref MGRS_PATTERN: Regex =
        Regex::new(r"^(\d{1,2})\s*([A-Z])\s*([A-Z])\s*([A-Z])\s*(\d*)\s*(\d*)$")
            .expect("MGRS pattern compiles");

    pub static ref UTM_PATTERN: Regex =
        Regex::new(r"^(\d{1,2})\s*([A-Z])\s+(\d+(?:\.\d+)?)(?:\s*M?E\s*[,;]?\s*|\s*[,;]\s*|\s+)(\d+(?:\.\d+)?)(?:\s*M?N)?$")
            .expect("UTM pattern compiles");

    pub static ref DMS_PREFIXED: Regex = pair(&prefixed(DMS_BODY));
    pub static ref DMS_SUFFIXED: Regex = pair(&suffixed(DMS_BODY));

    pub static ref DDM_PREFIXED: Regex = pair(&prefixed(DDM_BODY));
    pub static ref DDM_SUFFIXED: Regex = pair(&suffixed(DDM_BODY));

    pub static ref DD_PREFIXED: Regex = pair(&prefixed(DD_BODY));
    pub static ref DD_SUFFIXED: Regex = pair(&suffixed(DD_BODY));

    pub static ref SIGNED_DECIMAL_PAIR: Regex =
        Regex::new(r"^([-+]?\d+(?:\.\d+)?)\s*[°º]?(?:\s*[,;/]\s*|\s+)([-+]?\d+(?:\.\d+)?)\s*[°º]?$")
            .expect("decimal pair pattern compiles");
}

/// Hemisphere letter in front: `N 37 25.290`
fn prefixed(body: &str) -> String {
    format!(r"([NSEW])\s*{}", body)
}

/// Optional sign in front, optional hemisphere letter behind: `-37 25.290` or `37 25.290 S`
fn suffixed(body: &str) -> String {
    format!(r"([-+])?{}\s*([NSEW])?", body)
}

fn pair(component: &str) -> Regex {
    Regex::new(&format!(r"^{c}\s*[,;/]?\s*{c}$", c = component))
        .expect("coordinate pair pattern compiles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_layouts() {
        assert!(DMS_SUFFIXED.is_match("37° 25' 17.4\" N, 119° 11' 21.1\" W"));
        assert!(DMS_SUFFIXED.is_match("37°25'17.4\"N 119°11'21.1\"W"));
        assert!(DMS_SUFFIXED.is_match("37 25 17.4 -119 11 21.1"));
        assert!(DMS_PREFIXED.is_match("N 37 25 17.4 W 119 11 21.1"));
        assert!(!DMS_SUFFIXED.is_match("37° 25.290' N, 119° 11.352' W"));
    }

    #[test]
    fn test_ddm_and_dd_layouts() {
        assert!(DDM_SUFFIXED.is_match("37° 25.290' N, 119° 11.352' W"));
        assert!(DDM_PREFIXED.is_match("N37 25.290 W119 11.352"));
        assert!(!DDM_SUFFIXED.is_match("37.4215° N, 119.1892° W"));
        assert!(DD_SUFFIXED.is_match("37.4215° N, 119.1892° W"));
        assert!(DD_PREFIXED.is_match("N 37.4215, W 119.1892"));
    }

    #[test]
    fn test_grid_layouts() {
        assert!(MGRS_PATTERN.is_match("11SLB0628143881"));
        assert!(MGRS_PATTERN.is_match("11S LB 06281 43881"));
        assert!(!MGRS_PATTERN.is_match("11S 306282E 4143882N"));
        assert!(UTM_PATTERN.is_match("11S 306282E 4143882N"));
        assert!(UTM_PATTERN.is_match("11S 306282 4143882"));
        assert!(UTM_PATTERN.is_match("11S 306282.5ME, 4143882.25MN"));
        assert!(!UTM_PATTERN.is_match("11S 3062824143882"));
    }

    #[test]
    fn test_signed_pair() {
        assert!(SIGNED_DECIMAL_PAIR.is_match("37.4215, -119.1892"));
        assert!(SIGNED_DECIMAL_PAIR.is_match("37.4215 -119.1892"));
        assert!(SIGNED_DECIMAL_PAIR.is_match("+37.4215;-119.1892"));
        assert!(!SIGNED_DECIMAL_PAIR.is_match("37.4215-119.1892"));
    }
}
