//! Textual rendering of geographic coordinates
//!
//! One stringifier per [`FormatKind`]; the caller chooses the kind and
//! options for every call.

mod kind;
mod options;
mod formatter;

pub use self::kind::FormatKind;
pub use self::options::FormatOptions;
pub use self::formatter::CoordinateFormatter;
