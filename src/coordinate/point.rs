//! Geographic point in decimal degrees

use std::fmt;
use crate::errors::{CoordError, CoordResult};

/// A latitude/longitude pair on the WGS84 ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeographicPoint {
    /// Create a new point without range checks
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeographicPoint { latitude, longitude }
    }

    /// Create a new point, rejecting latitudes outside [-90, 90]
    /// and longitudes outside [-180, 180]
    pub fn checked(latitude: f64, longitude: f64) -> CoordResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        Ok(GeographicPoint { latitude, longitude })
    }

    /// Check that both components lie on the globe
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for GeographicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
