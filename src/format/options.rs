//! Per-call formatting options

use super::kind::FormatKind;

/// Options for a single formatting call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Drop the spaces and commas between tokens
    pub compact: bool,
    /// Precision override; `None` uses the format's default
    pub precision: Option<u8>,
}

impl FormatOptions {
    /// Create options
    pub fn new(compact: bool, precision: Option<u8>) -> Self {
        FormatOptions { compact, precision }
    }

    /// Compact options with the default precision
    pub fn compact() -> Self {
        FormatOptions { compact: true, precision: None }
    }

    /// Same options with an explicit precision
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Precision to use for `kind`
    pub fn precision_for(&self, kind: FormatKind) -> u8 {
        self.precision.unwrap_or_else(|| kind.default_precision())
    }
}
