//! Recognizer trait definition

use crate::coordinate::GeographicPoint;
use crate::errors::CoordResult;
use crate::format::FormatKind;

/// Strategy trait for recognizing one textual coordinate format
pub trait CoordinateRecognizer: Send + Sync {
    /// Try to read `text`, which is already trimmed and uppercased
    ///
    /// # Returns
    /// `None` when the text does not have this format's shape, otherwise
    /// the point or the reason the matched text is unusable
    fn recognize(&self, text: &str) -> Option<CoordResult<GeographicPoint>>;

    /// Format this recognizer reads
    fn kind(&self) -> FormatKind;

    /// Get the name of this recognizer
    fn name(&self) -> &'static str;
}
