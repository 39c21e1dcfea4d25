//! Error types for sp-etl

use sp_core::CoreError;
use sp_db::DbError;
use thiserror::Error;

/// Load pipeline errors
#[derive(Error, Debug)]
pub enum EtlError {
    /// L001: A dataset file could not be read or transformed
    #[error("[L001] Failed to transform '{path}': {source}")]
    Source {
        path: String,
        #[source]
        source: CoreError,
    },

    /// L002: Writing a file's rows failed; the file's transaction was rolled back
    #[error("[L002] Failed to load '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: DbError,
    },

    /// L003: Core error outside of a single file
    #[error("[L003] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for EtlError
pub type EtlResult<T> = Result<T, EtlError>;
