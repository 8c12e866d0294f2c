//! Supported coordinate formats

use std::fmt;
use std::str::FromStr;

use crate::errors::CoordError;

/// The closed set of textual coordinate formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Decimal degrees
    DD,
    /// Degrees, minutes, seconds
    DMS,
    /// Degrees, decimal minutes
    DDM,
    /// Universal Transverse Mercator
    UTM,
    /// Military Grid Reference System
    MGRS,
}

impl FormatKind {
    /// Every format, in display order
    pub const ALL: [FormatKind; 5] = [
        FormatKind::DD,
        FormatKind::DMS,
        FormatKind::DDM,
        FormatKind::UTM,
        FormatKind::MGRS,
    ];

    /// Precision used when the caller does not pick one
    ///
    /// Fractional digits for DD, decimal places of the last sexagesimal
    /// unit for DMS/DDM, decimals of meters for UTM and digits per axis
    /// for MGRS.
    pub fn default_precision(&self) -> u8 {
        match self {
            FormatKind::DD => 4,
            FormatKind::DMS => 1,
            FormatKind::DDM => 3,
            FormatKind::UTM => 0,
            FormatKind::MGRS => 5,
        }
    }

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::DD => "dd",
            FormatKind::DMS => "dms",
            FormatKind::DDM => "ddm",
            FormatKind::UTM => "utm",
            FormatKind::MGRS => "mgrs",
        }
    }

    /// Human readable description
    pub fn description(&self) -> &'static str {
        match self {
            FormatKind::DD => "Decimal degrees",
            FormatKind::DMS => "Degrees, minutes, seconds",
            FormatKind::DDM => "Degrees, decimal minutes",
            FormatKind::UTM => "Universal Transverse Mercator",
            FormatKind::MGRS => "Military Grid Reference System",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

impl FromStr for FormatKind {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dd" | "decimal" => Ok(FormatKind::DD),
            "dms" => Ok(FormatKind::DMS),
            "ddm" | "dm" => Ok(FormatKind::DDM),
            "utm" => Ok(FormatKind::UTM),
            "mgrs" => Ok(FormatKind::MGRS),
            other => Err(CoordError::GenericError(format!("Unknown coordinate format: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in FormatKind::ALL {
            assert_eq!(kind.name().parse::<FormatKind>().unwrap(), kind);
            assert_eq!(kind.to_string().parse::<FormatKind>().unwrap(), kind);
        }
        assert!("lat-lon".parse::<FormatKind>().is_err());
    }
}
