//! Connector-side schema model.
//!
//! A [`Schema`] describes a value by primitive [`SchemaType`] plus an
//! optional logical type name (see [`logical`]) and string parameters. Struct
//! schemas are assembled with [`SchemaBuilder`]; sink-side columns are
//! described by [`SinkRecordField`].

mod sink;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

pub use sink::SinkRecordField;

/// Logical type names and their parameters.
pub mod logical {
    /// Arbitrary-precision decimal, stored as bytes with a `scale` parameter.
    pub const DECIMAL: &str = "org.apache.kafka.connect.data.Decimal";
    /// Calendar date, stored as days since the epoch.
    pub const DATE: &str = "org.apache.kafka.connect.data.Date";
    /// Time of day, stored as milliseconds since midnight.
    pub const TIME: &str = "org.apache.kafka.connect.data.Time";
    /// Instant, stored as milliseconds since the epoch.
    pub const TIMESTAMP: &str = "org.apache.kafka.connect.data.Timestamp";
    /// Decimal scale parameter.
    pub const SCALE_FIELD: &str = "scale";
}

/// Primitive schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Single-precision float.
    Float32,
    /// Double-precision float.
    Float64,
    /// Boolean.
    Boolean,
    /// UTF-8 string.
    String,
    /// Byte array.
    Bytes,
    /// Ordered collection.
    Array,
    /// Key/value collection.
    Map,
    /// Nested record.
    Struct,
}

impl SchemaType {
    /// Returns the upper-case type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int8 => "INT8",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::Float32 => "FLOAT32",
            Self::Float64 => "FLOAT64",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
            Self::Array => "ARRAY",
            Self::Map => "MAP",
            Self::Struct => "STRUCT",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Int(i64),
    /// Float default.
    Float(f64),
    /// String default.
    Text(String),
    /// Binary default.
    Bytes(Vec<u8>),
}

impl DefaultValue {
    /// Returns the SQL literal for this default value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Bool(b) => String::from(if *b { "1" } else { "0" }),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Bytes(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02X}")).collect();
                format!("x'{hex}'")
            }
        }
    }
}

/// A field inside a struct schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    index: usize,
    schema: Schema,
}

impl Field {
    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the 0-based position of the field in its struct.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the field's schema.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Describes the type of a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    schema_type: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    parameters: BTreeMap<String, String>,
    #[serde(default)]
    optional: bool,
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    default_value: Option<DefaultValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
}

impl Schema {
    /// Creates a required schema of the given primitive type.
    #[must_use]
    pub const fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            name: None,
            parameters: BTreeMap::new(),
            optional: false,
            default_value: None,
            fields: Vec::new(),
        }
    }

    /// Decimal logical type with the given scale.
    #[must_use]
    pub fn decimal(scale: i32) -> Self {
        Self::new(SchemaType::Bytes)
            .with_name(logical::DECIMAL)
            .with_parameter(logical::SCALE_FIELD, scale.to_string())
    }

    /// Date logical type.
    #[must_use]
    pub fn date() -> Self {
        Self::new(SchemaType::Int32).with_name(logical::DATE)
    }

    /// Time logical type.
    #[must_use]
    pub fn time() -> Self {
        Self::new(SchemaType::Int32).with_name(logical::TIME)
    }

    /// Timestamp logical type.
    #[must_use]
    pub fn timestamp() -> Self {
        Self::new(SchemaType::Int64).with_name(logical::TIMESTAMP)
    }

    /// Sets the logical type name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a schema parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Marks the schema optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the optionality explicitly.
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Returns the primitive type.
    #[must_use]
    pub const fn schema_type(&self) -> SchemaType {
        self.schema_type
    }

    /// Returns the logical type name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the schema parameters.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Returns whether null values are allowed.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns the default value, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    /// Returns the struct fields; empty for non-struct schemas.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a struct field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builds a struct schema field by field.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    name: Option<String>,
    optional: bool,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Creates a builder for a struct schema.
    #[must_use]
    pub fn struct_builder() -> Self {
        Self::default()
    }

    /// Sets the struct's name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the struct optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Adds a field.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::DuplicateField`] if a field with the same
    /// name was already added.
    pub fn field(&mut self, name: &str, schema: Schema) -> Result<&mut Self> {
        if self.fields.iter().any(|f| f.name == name) {
            return Err(DialectError::DuplicateField(name.to_string()));
        }
        let index = self.fields.len();
        self.fields.push(Field {
            name: name.to_string(),
            index,
            schema,
        });
        Ok(self)
    }

    /// Returns the fields added so far.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Builds the struct schema.
    #[must_use]
    pub fn build(self) -> Schema {
        let mut schema = Schema::new(SchemaType::Struct).with_optional(self.optional);
        schema.name = self.name;
        schema.fields = self.fields;
        schema
    }
}
