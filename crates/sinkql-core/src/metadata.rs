//! Capability probes over driver column metadata.
//!
//! Drivers report some column attributes only through vendor-specific
//! columns of their metadata result sets. Dialects ask for those attributes
//! by [`MetadataCapability`] and get an explicit outcome back: a value, no
//! value, or a [`ProbeError`] saying why the metadata could not answer.

use std::collections::HashMap;
use std::fmt;

use crate::error::ProbeError;

/// A column attribute a dialect may probe for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataCapability {
    /// `YES`/`NO` indicator of an auto-incrementing column.
    AutoIncrement,
}

impl MetadataCapability {
    /// Returns the capability's name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AutoIncrement => "auto_increment",
        }
    }
}

impl fmt::Display for MetadataCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of column metadata that can be probed for capabilities.
pub trait ColumnMetadata {
    /// Reads the value for `capability`. `Ok(None)` means the metadata
    /// supports the capability but holds no value for this column.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] if the capability cannot be read.
    fn probe(&self, capability: MetadataCapability) -> Result<Option<String>, ProbeError>;
}

/// Metadata that supports no capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

impl ColumnMetadata for NoMetadata {
    fn probe(&self, capability: MetadataCapability) -> Result<Option<String>, ProbeError> {
        Err(ProbeError::Unsupported(capability.as_str()))
    }
}

/// A positional metadata row, as returned by a driver's column listing,
/// with capabilities mapped onto 1-based positions.
#[derive(Debug, Clone, Default)]
pub struct PositionalMetadataRow {
    values: Vec<Option<String>>,
    positions: HashMap<MetadataCapability, usize>,
}

impl PositionalMetadataRow {
    /// Creates a row with no capability mapped yet.
    #[must_use]
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self {
            values,
            positions: HashMap::new(),
        }
    }

    /// Maps `capability` onto the 1-based `position`.
    #[must_use]
    pub fn with_capability(mut self, capability: MetadataCapability, position: usize) -> Self {
        self.positions.insert(capability, position);
        self
    }

    /// Returns the number of values in the row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.len()
    }
}

impl ColumnMetadata for PositionalMetadataRow {
    fn probe(&self, capability: MetadataCapability) -> Result<Option<String>, ProbeError> {
        let position = *self
            .positions
            .get(&capability)
            .ok_or(ProbeError::Unsupported(capability.as_str()))?;
        position
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .cloned()
            .ok_or(ProbeError::OutOfRange {
                position,
                width: self.values.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_probe() {
        let row = PositionalMetadataRow::new(vec![Some("a".into()), None, Some("YES".into())])
            .with_capability(MetadataCapability::AutoIncrement, 3);
        assert_eq!(
            row.probe(MetadataCapability::AutoIncrement),
            Ok(Some("YES".to_string()))
        );

        let row = row.with_capability(MetadataCapability::AutoIncrement, 2);
        assert_eq!(row.probe(MetadataCapability::AutoIncrement), Ok(None));
    }

    #[test]
    fn test_probe_failures() {
        let row = PositionalMetadataRow::new(vec![Some("a".into())]);
        assert_eq!(
            row.probe(MetadataCapability::AutoIncrement),
            Err(ProbeError::Unsupported("auto_increment"))
        );

        let row = row.with_capability(MetadataCapability::AutoIncrement, 22);
        assert_eq!(
            row.probe(MetadataCapability::AutoIncrement),
            Err(ProbeError::OutOfRange {
                position: 22,
                width: 1
            })
        );

        let row = row.with_capability(MetadataCapability::AutoIncrement, 0);
        assert!(row.probe(MetadataCapability::AutoIncrement).is_err());
    }

    #[test]
    fn test_no_metadata() {
        assert!(NoMetadata.probe(MetadataCapability::AutoIncrement).is_err());
    }
}
