//! Utility modules for common functionality
//!
//! Logging and progress reporting used by the command-line host.

pub mod logger;
pub mod progress;
