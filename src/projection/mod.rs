//! UTM projection
//!
//! Zone and band selection plus the forward and inverse transverse
//! Mercator series between WGS84 latitude/longitude and UTM.

pub mod zones;
mod cell;
mod projector;

pub use self::cell::GridCell;
pub use self::projector::GeodeticProjector;
