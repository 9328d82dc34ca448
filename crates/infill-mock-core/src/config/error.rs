//! Error types for fixture file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Fixture configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Fixture file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed glob pattern
    #[error("Invalid fixture pattern: {0}")]
    Glob(#[from] glob::PatternError),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// Pattern matched nothing
    #[error("No fixture files match: {0}")]
    NoFilesMatched(String),
}
