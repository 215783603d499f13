//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax, type names and
//! metadata quirks. [`DatabaseDialect`] describes everything a connector asks
//! of a dialect; every method has a default that delegates to the matching
//! function in [`generic`], so a concrete dialect overrides only what it
//! changes and calls back into [`generic`] for the rest.

pub mod generic;

pub use generic::GenericDialect;

use crate::column::{ColumnAttributes, ColumnDefinition, ColumnMapping};
use crate::config::DialectConfig;
use crate::error::{DialectError, Result};
use crate::expression::ExpressionBuilder;
use crate::identifier::{ColumnId, IdentifierRules, TableId};
use crate::metadata::ColumnMetadata;
use crate::row::ColumnConverter;
use crate::sanitize;
use crate::schema::{SchemaBuilder, SinkRecordField};
use crate::types::TypeMapper;

/// Options for `DROP TABLE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropOptions {
    if_exists: bool,
    cascade: bool,
}

impl DropOptions {
    /// Creates options with both flags off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            if_exists: false,
            cascade: false,
        }
    }

    /// Guards the drop with an existence check.
    #[must_use]
    pub const fn if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = if_exists;
        self
    }

    /// Drops dependent objects too.
    #[must_use]
    pub const fn cascade(mut self, cascade: bool) -> Self {
        self.cascade = cascade;
        self
    }

    #[must_use]
    pub const fn is_if_exists(&self) -> bool {
        self.if_exists
    }

    #[must_use]
    pub const fn is_cascade(&self) -> bool {
        self.cascade
    }
}

/// Trait for database-specific SQL generation and metadata handling.
pub trait DatabaseDialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the configuration the dialect was built with.
    fn config(&self) -> &DialectConfig;

    /// Returns the resolved type mapper.
    fn type_mapper(&self) -> &TypeMapper;

    /// Returns the separator and quote characters for identifiers.
    fn identifier_rules(&self) -> &IdentifierRules {
        &IdentifierRules::ANSI
    }

    /// Returns whether the driver's catalog names the database, and so
    /// whether a table's catalog is rendered in statements.
    fn use_catalog(&self) -> bool {
        false
    }

    /// Returns a builder that renders identifiers with this dialect's rules.
    fn expression_builder(&self) -> ExpressionBuilder<'_> {
        ExpressionBuilder::new(self.identifier_rules(), self.config().quote_identifiers)
            .with_catalog(self.use_catalog())
    }

    /// Returns the SQL column type for a field.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the field's schema has no mapping.
    fn sql_type(&self, field: &SinkRecordField) -> Result<String> {
        self.type_mapper().sql_type(field)
    }

    /// Generates SQL for CREATE TABLE.
    ///
    /// # Errors
    ///
    /// Returns an error if `fields` is empty or a field type is unmapped.
    fn build_create_table(&self, table: &TableId, fields: &[SinkRecordField]) -> Result<String> {
        generic::build_create_table(self, table, fields)
    }

    /// Generates SQL for DROP TABLE.
    fn build_drop_table(&self, table: &TableId, options: DropOptions) -> String {
        generic::build_drop_table(self, table, options)
    }

    /// Generates the statements that add `fields` to `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if `fields` is empty or a field type is unmapped.
    fn build_alter_table(
        &self,
        table: &TableId,
        fields: &[SinkRecordField],
    ) -> Result<Vec<String>> {
        generic::build_alter_table(self, table, fields)
    }

    /// Generates a parameterized INSERT, key columns first.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns at all.
    fn build_insert(
        &self,
        table: &TableId,
        key_columns: &[ColumnId],
        non_key_columns: &[ColumnId],
    ) -> Result<String> {
        generic::build_insert(self, table, key_columns, non_key_columns)
    }

    /// Generates a parameterized UPDATE of the non-key columns by key.
    ///
    /// # Errors
    ///
    /// Returns an error if either column list is empty.
    fn build_update(
        &self,
        table: &TableId,
        key_columns: &[ColumnId],
        non_key_columns: &[ColumnId],
    ) -> Result<String> {
        generic::build_update(self, table, key_columns, non_key_columns)
    }

    /// Generates a parameterized upsert.
    ///
    /// # Errors
    ///
    /// The default returns [`DialectError::UnsupportedOperation`].
    fn build_upsert(
        &self,
        _table: &TableId,
        _key_columns: &[ColumnId],
        _non_key_columns: &[ColumnId],
    ) -> Result<String> {
        Err(DialectError::UnsupportedOperation {
            dialect: self.name(),
            operation: "upsert",
        })
    }

    /// Generates a parameterized DELETE by key.
    ///
    /// # Errors
    ///
    /// Returns an error if `key_columns` is empty.
    fn build_delete(&self, table: &TableId, key_columns: &[ColumnId]) -> Result<String> {
        generic::build_delete(self, table, key_columns)
    }

    /// Builds a column definition from generic attributes, refined by any
    /// dialect-specific metadata.
    fn column_definition(
        &self,
        _metadata: &dyn ColumnMetadata,
        attributes: ColumnAttributes,
    ) -> ColumnDefinition {
        generic::column_definition(attributes)
    }

    /// Returns a converter for a result column, or `None` if its type is
    /// not supported.
    fn column_converter(&self, mapping: &ColumnMapping) -> Option<ColumnConverter> {
        generic::column_converter(mapping, self.config().time_zone)
    }

    /// Adds a field for `column` to `builder`, returning the field name, or
    /// `None` if the column's type is not supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder already has a field of that name.
    fn add_field_to_schema(
        &self,
        column: &ColumnDefinition,
        builder: &mut SchemaBuilder,
    ) -> Result<Option<String>> {
        generic::add_field_to_schema(column, builder)
    }

    /// Returns `url` with secrets masked, safe to log.
    fn sanitized_url(&self, url: &str) -> String {
        sanitize::sanitize_url(url)
    }
}
