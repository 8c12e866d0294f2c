//! MGRS 100 km grid square encoding

mod encoder;

pub use self::encoder::{GridReferenceEncoder, MAX_PRECISION};
