//! Field lists read from JSON files.

use std::path::Path;

use sinkql_core::SinkRecordField;

use crate::error::{CliError, Result};

/// Parses a JSON array of fields.
///
/// # Errors
///
/// Returns the JSON error if `json` is not an array of fields.
pub fn parse(json: &str) -> serde_json::Result<Vec<SinkRecordField>> {
    serde_json::from_str(json)
}

/// Reads and parses a field list file.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be read and
/// [`CliError::Fields`] if it does not hold a field list.
pub fn load(path: &Path) -> Result<Vec<SinkRecordField>> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json).map_err(|source| CliError::Fields {
        path: path.to_path_buf(),
        source,
    })
}
