//! Mapping from connector schemas to SQL column types.
//!
//! A [`TypeTable`] holds the entries one dialect registers, keyed either by
//! logical type name or by primitive [`SchemaType`]. A [`TypeMapper`] layers
//! a dialect's delta table over a shared default table:
//!
//! 1. delta, by logical name
//! 2. delta, by primitive type
//! 3. defaults, by logical name
//! 4. defaults, by primitive type
//!
//! A field nothing matches is a configuration error, never a panic.

use std::collections::HashMap;

use crate::error::{DialectError, Result};
use crate::schema::{SchemaType, SinkRecordField, logical};

/// Renders a SQL type for a field.
#[derive(Clone, Copy)]
pub enum TypeRenderer {
    /// A fixed type name.
    Fixed(&'static str),
    /// A type computed from the field (e.g. from its parameters).
    Computed(fn(&SinkRecordField) -> Result<String>),
}

impl std::fmt::Debug for TypeRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(name) => f.debug_tuple("Fixed").field(name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl TypeRenderer {
    /// Renders the SQL type for `field`.
    ///
    /// # Errors
    ///
    /// Propagates errors from computed renderers.
    pub fn render(&self, field: &SinkRecordField) -> Result<String> {
        match self {
            Self::Fixed(name) => Ok((*name).to_string()),
            Self::Computed(render) => render(field),
        }
    }
}

/// A set of type mapping entries.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    logical: HashMap<&'static str, TypeRenderer>,
    primitive: HashMap<SchemaType, TypeRenderer>,
}

impl TypeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fixed type for a logical type name.
    #[must_use]
    pub fn logical(mut self, name: &'static str, sql_type: &'static str) -> Self {
        self.logical.insert(name, TypeRenderer::Fixed(sql_type));
        self
    }

    /// Registers a computed type for a logical type name.
    #[must_use]
    pub fn logical_with(
        mut self,
        name: &'static str,
        render: fn(&SinkRecordField) -> Result<String>,
    ) -> Self {
        self.logical.insert(name, TypeRenderer::Computed(render));
        self
    }

    /// Registers a fixed type for a primitive type.
    #[must_use]
    pub fn primitive(mut self, schema_type: SchemaType, sql_type: &'static str) -> Self {
        self.primitive
            .insert(schema_type, TypeRenderer::Fixed(sql_type));
        self
    }

    /// Finds the entry for a field: logical name first, then primitive type.
    #[must_use]
    pub fn resolve(&self, field: &SinkRecordField) -> Option<&TypeRenderer> {
        field
            .schema_name()
            .and_then(|name| self.logical.get(name))
            .or_else(|| self.primitive.get(&field.schema_type()))
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.logical.len() + self.primitive.len()
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves SQL types through a dialect delta and a default table.
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    delta: TypeTable,
    defaults: TypeTable,
}

impl TypeMapper {
    /// Creates a mapper from a delta and the defaults it overrides.
    #[must_use]
    pub const fn new(delta: TypeTable, defaults: TypeTable) -> Self {
        Self { delta, defaults }
    }

    /// Returns the SQL type for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnmappedType`] when neither table has an
    /// entry, or any error a computed renderer raises.
    pub fn sql_type(&self, field: &SinkRecordField) -> Result<String> {
        self.delta
            .resolve(field)
            .or_else(|| self.defaults.resolve(field))
            .ok_or_else(|| DialectError::UnmappedType {
                schema_type: field.schema_type(),
                logical_name: field.schema_name().map(String::from),
            })?
            .render(field)
    }
}

/// Reads the decimal scale parameter of a field.
///
/// # Errors
///
/// Returns [`DialectError::MissingParameter`] if the parameter is absent or
/// not an integer.
pub fn decimal_scale(field: &SinkRecordField) -> Result<i32> {
    field
        .schema_parameters()
        .get(logical::SCALE_FIELD)
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| DialectError::MissingParameter {
            logical_name: logical::DECIMAL.to_string(),
            parameter: logical::SCALE_FIELD.to_string(),
        })
}

/// The shared default table every dialect falls back to.
#[must_use]
pub fn default_types() -> TypeTable {
    TypeTable::new()
        .logical_with(logical::DECIMAL, |f| {
            Ok(format!("DECIMAL(38,{})", decimal_scale(f)?))
        })
        .logical(logical::DATE, "DATE")
        .logical(logical::TIME, "TIME")
        .logical(logical::TIMESTAMP, "TIMESTAMP")
        .primitive(SchemaType::Int8, "SMALLINT")
        .primitive(SchemaType::Int16, "SMALLINT")
        .primitive(SchemaType::Int32, "INTEGER")
        .primitive(SchemaType::Int64, "BIGINT")
        .primitive(SchemaType::Float32, "REAL")
        .primitive(SchemaType::Float64, "DOUBLE PRECISION")
        .primitive(SchemaType::Boolean, "BOOLEAN")
        .primitive(SchemaType::String, "TEXT")
        .primitive(SchemaType::Bytes, "BLOB")
}
