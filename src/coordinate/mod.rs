//! Coordinate value types
//!
//! Plain value types for geographic, UTM and MGRS coordinates, plus the
//! WGS84 ellipsoid constants every transform is built on.

mod point;
mod utm;
mod mgrs;
pub mod ellipsoid;

// Re-export key types
pub use self::point::GeographicPoint;
pub use self::utm::{UtmCoordinate, BAND_LETTERS};
pub use self::mgrs::MgrsCoordinate;
