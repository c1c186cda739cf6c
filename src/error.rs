//! Error types for pendlab.
//!
//! Configuration loading and saving are the only fallible operations that
//! cross module boundaries; everything else degrades in place.

use std::fmt;

/// Errors that can occur while loading or saving the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the file on disk.
    Io(std::io::Error),
    /// The file exists but is not valid configuration JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access configuration file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
