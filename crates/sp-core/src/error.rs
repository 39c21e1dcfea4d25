//! Error types for sp-core

use thiserror::Error;

/// Core error type for Sparkify
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Dataset root directory not found
    #[error("[E003] Dataset directory not found: {path}")]
    DatasetNotFound { path: String },

    /// E004: A line of a JSON-lines file is not a valid JSON object
    #[error("[E004] Malformed record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    /// E006: A field holds a value of the wrong type
    #[error("[E006] Field '{field}' on line {line} is not a valid {expected}: {found}")]
    InvalidField {
        line: usize,
        field: String,
        expected: &'static str,
        found: String,
    },

    /// E007: Epoch-millisecond timestamp outside the representable range
    #[error("[E007] Timestamp {ts} on line {line} is out of range")]
    InvalidTimestamp { line: usize, ts: i64 },

    /// E008: A song file without any record
    #[error("[E008] Song file contains no records")]
    EmptyFile,

    /// E009: IO error
    #[error("[E009] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E010: IO error with file path context
    #[error("[E010] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E011: Config YAML parse error
    #[error("[E011] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
