//! Logger utility for application-wide logging
//!
//! This module provides a logger implementation for the `log` crate that
//! writes every record to a file and echoes it to stderr, keeping stdout
//! free for converted coordinates.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level this logger accepts
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level to record
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Writes a line to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        // Only the first installation wins; later calls keep the existing logger
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);

            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::fs;

    #[test]
    fn test_writes_enabled_records() {
        let path = std::env::temp_dir().join(format!("coordkit-logger-test-{}.log", std::process::id()));
        let path_str = path.to_str().unwrap();
        let logger = Logger::new(path_str, LevelFilter::Info).unwrap();

        assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));

        logger.write_line("[INFO] converted 3 coordinates").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("converted 3 coordinates"));
        let _ = fs::remove_file(&path);
    }
}
