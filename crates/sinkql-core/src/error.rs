//! Error types for dialects, row access and metadata probing.

use crate::schema::SchemaType;

/// Errors raised while building statements, mapping types or converting rows.
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    /// No dialect or default mapping exists for a field's schema.
    #[error("{} ({schema_type}) type doesn't have a mapping to the SQL database column type", .logical_name.as_deref().unwrap_or("<none>"))]
    UnmappedType {
        /// Primitive schema type of the field.
        schema_type: SchemaType,
        /// Logical type name of the field, if any.
        logical_name: Option<String>,
    },

    /// A logical type is missing a parameter it needs to render.
    #[error("logical type '{logical_name}' is missing required parameter '{parameter}'")]
    MissingParameter {
        /// Logical type name.
        logical_name: String,
        /// Name of the missing or malformed parameter.
        parameter: String,
    },

    /// The caller passed arguments that cannot produce a complete statement.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The dialect does not implement the requested statement.
    #[error("dialect '{dialect}' does not support {operation}")]
    UnsupportedOperation {
        /// Dialect name.
        dialect: &'static str,
        /// Operation that was requested.
        operation: &'static str,
    },

    /// A qualified identifier could not be parsed.
    #[error("invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    /// A configured time zone could not be parsed.
    #[error("invalid time zone: '{0}'")]
    InvalidTimeZone(String),

    /// A struct schema already holds a field with this name.
    #[error("cannot create field because of field name duplication: {0}")]
    DuplicateField(String),

    /// Reading a value from a result row failed.
    #[error(transparent)]
    Row(#[from] RowError),

    /// A row value did not have the shape the column converter expects.
    #[error("column {column}: expected {expected}, found {found}")]
    Conversion {
        /// 1-based column number.
        column: usize,
        /// What the converter expected.
        expected: &'static str,
        /// What the row actually held.
        found: String,
    },
}

/// Errors raised by a result row when a value cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The column number is outside the row.
    #[error("column index {index} is out of range (row has {width} columns)")]
    OutOfRange {
        /// Requested 1-based column number.
        index: usize,
        /// Number of columns in the row.
        width: usize,
    },

    /// The underlying driver reported an error.
    #[error("driver error: {0}")]
    Driver(String),
}

/// Errors raised while probing column metadata for a capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The metadata source cannot answer this capability at all.
    #[error("metadata capability '{0}' is not supported")]
    Unsupported(&'static str),

    /// The capability maps to a position the metadata row does not have.
    #[error("metadata position {position} is out of range (row has {width} columns)")]
    OutOfRange {
        /// 1-based position the capability maps to.
        position: usize,
        /// Number of columns in the metadata row.
        width: usize,
    },

    /// The underlying driver reported an error.
    #[error("driver error: {0}")]
    Driver(String),
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
