//! Error types for the command-line tool.

use std::path::PathBuf;

use sinkql_core::DialectError;

/// Errors that can occur while rendering a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The dialect rejected the request.
    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// A field list file could not be read.
    #[error("Failed to read field list '{path}': {source}")]
    Io {
        /// Path to the field list.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A field list file is not valid JSON for a list of fields.
    #[error("Failed to parse field list '{path}': {source}")]
    Fields {
        /// Path to the field list.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
