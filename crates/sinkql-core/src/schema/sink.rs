//! Outgoing column descriptors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DefaultValue, Schema, SchemaType};

/// Describes a column a sink writes to: its name, value schema and whether
/// it belongs to the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinkRecordField {
    name: String,
    schema: Schema,
    #[serde(default)]
    primary_key: bool,
}

impl SinkRecordField {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Schema, primary_key: bool) -> Self {
        Self {
            name: name.into(),
            schema,
            primary_key,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value schema.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the primitive type.
    #[must_use]
    pub const fn schema_type(&self) -> SchemaType {
        self.schema.schema_type()
    }

    /// Returns the logical type name, if any.
    #[must_use]
    pub fn schema_name(&self) -> Option<&str> {
        self.schema.name()
    }

    /// Returns the schema parameters.
    #[must_use]
    pub const fn schema_parameters(&self) -> &BTreeMap<String, String> {
        self.schema.parameters()
    }

    /// Returns whether the column accepts nulls. Primary key columns never do.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        !self.primary_key && self.schema.is_optional()
    }

    /// Returns the default value, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&DefaultValue> {
        self.schema.default_value()
    }

    /// Returns whether the column is part of the primary key.
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key
    }
}
