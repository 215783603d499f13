//! Result row access and column converters.

use crate::error::{Result, RowError};
use crate::value::{SqlValue, Value};

/// A row of a result set, read by 1-based column number.
pub trait ResultRow {
    /// Reads the value of a column.
    ///
    /// # Errors
    ///
    /// Returns a [`RowError`] if the column cannot be read.
    fn value(&self, column: usize) -> std::result::Result<SqlValue, RowError>;
}

/// Extracts one column of a row as a connector value.
pub type ColumnConverter = Box<dyn Fn(&dyn ResultRow) -> Result<Value> + Send + Sync>;

impl ResultRow for [SqlValue] {
    fn value(&self, column: usize) -> std::result::Result<SqlValue, RowError> {
        column
            .checked_sub(1)
            .and_then(|i| self.get(i))
            .cloned()
            .ok_or(RowError::OutOfRange {
                index: column,
                width: self.len(),
            })
    }
}

impl ResultRow for Vec<SqlValue> {
    fn value(&self, column: usize) -> std::result::Result<SqlValue, RowError> {
        self.as_slice().value(column)
    }
}
