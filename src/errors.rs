//! Custom error types for coordinate processing

use std::fmt;
use std::io;

/// Coordinate conversion error types
#[derive(Debug)]
pub enum CoordError {
    /// Latitude outside the domain of the requested operation
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180]
    InvalidLongitude(f64),
    /// UTM zone outside [1, 60]
    InvalidZone(u8),
    /// Latitude band letter outside C..X (I and O excluded)
    InvalidBand(char),
    /// MGRS reference that cannot be decoded
    MalformedGridReference(String),
    /// Text that no recognizer accepts
    ParseFailure(String),
    /// Text parsed structurally but the resulting point is off the globe
    OutOfRange {
        latitude: f64,
        longitude: f64,
    },
    /// I/O error
    IoError(io::Error),
    /// Configuration file problem
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl CoordError {
    /// Stable taxonomy name, suitable for showing next to rejected input
    pub fn kind_name(&self) -> &'static str {
        match self {
            CoordError::InvalidLatitude(_) => "InvalidLatitude",
            CoordError::InvalidLongitude(_) => "InvalidLongitude",
            CoordError::InvalidZone(_) => "InvalidZone",
            CoordError::InvalidBand(_) => "InvalidBand",
            CoordError::MalformedGridReference(_) => "MalformedGridReference",
            CoordError::ParseFailure(_) => "ParseFailure",
            CoordError::OutOfRange { .. } => "OutOfRange",
            CoordError::IoError(_) => "IoError",
            CoordError::ConfigError(_) => "ConfigError",
            CoordError::GenericError(_) => "GenericError",
        }
    }
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(lat) => write!(f, "Invalid latitude: {}", lat),
            CoordError::InvalidLongitude(lon) => write!(f, "Invalid longitude: {}", lon),
            CoordError::InvalidZone(zone) => write!(f, "Invalid UTM zone: {}", zone),
            CoordError::InvalidBand(band) => write!(f, "Invalid latitude band: {}", band),
            CoordError::MalformedGridReference(msg) => write!(f, "Malformed grid reference: {}", msg),
            CoordError::ParseFailure(text) => write!(f, "Not a recognizable coordinate: {}", text),
            CoordError::OutOfRange { latitude, longitude } => {
                write!(f, "Coordinate out of range: {}, {}", latitude, longitude)
            },
            CoordError::IoError(e) => write!(f, "I/O error: {}", e),
            CoordError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CoordError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CoordError {}

impl From<io::Error> for CoordError {
    fn from(error: io::Error) -> Self {
        CoordError::IoError(error)
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;

impl From<String> for CoordError {
    fn from(msg: String) -> Self {
        CoordError::GenericError(msg)
    }
}
