//! SQL Server dialect implementation.

use sinkql_core::metadata::{ColumnMetadata, MetadataCapability, PositionalMetadataRow};
use sinkql_core::row::ColumnConverter;
use sinkql_core::types::{TypeMapper, default_types};
use sinkql_core::{
    ColumnAttributes, ColumnDefinition, ColumnId, ColumnMapping, DatabaseDialect, DialectConfig,
    DialectProvider, DropOptions, IdentifierRules, JdbcType, Result, SchemaBuilder, SinkRecordField,
    TableId,
};

use crate::builder;
use crate::introspect;
use crate::sanitize;
use crate::types::sql_server_types;

/// `microsoft.sql.Types.DATETIMEOFFSET`.
pub const DATETIMEOFFSET: JdbcType = JdbcType(-155);

/// 1-based position of the `IS_AUTOINCREMENT` indicator in the driver's
/// `getColumns` rows.
pub const AUTO_INCREMENT_POSITION: usize = 22;

/// Square brackets around identifiers, `.` between qualified parts.
pub const IDENTIFIER_RULES: IdentifierRules = IdentifierRules::new(".", "[", "]");

/// Microsoft SQL Server dialect.
#[derive(Debug, Clone)]
pub struct SqlServerDialect {
    config: DialectConfig,
    types: TypeMapper,
}

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub fn new(config: DialectConfig) -> Self {
        Self {
            config,
            types: TypeMapper::new(sql_server_types(), default_types()),
        }
    }

    /// Wraps a positional `getColumns` row so the auto-increment indicator
    /// can be probed.
    #[must_use]
    pub fn metadata_row(values: Vec<Option<String>>) -> PositionalMetadataRow {
        PositionalMetadataRow::new(values)
            .with_capability(MetadataCapability::AutoIncrement, AUTO_INCREMENT_POSITION)
    }
}

impl Default for SqlServerDialect {
    fn default() -> Self {
        Self::new(DialectConfig::default())
    }
}

impl DatabaseDialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn config(&self) -> &DialectConfig {
        &self.config
    }

    fn type_mapper(&self) -> &TypeMapper {
        &self.types
    }

    fn identifier_rules(&self) -> &IdentifierRules {
        &IDENTIFIER_RULES
    }

    // The driver's catalog is the database; its schema is the owner (`dbo`).
    fn use_catalog(&self) -> bool {
        true
    }

    fn build_drop_table(&self, table: &TableId, options: DropOptions) -> String {
        builder::ddl::drop_table(self, table, options)
    }

    fn build_alter_table(
        &self,
        table: &TableId,
        fields: &[SinkRecordField],
    ) -> Result<Vec<String>> {
        builder::ddl::alter_table(self, table, fields)
    }

    fn build_upsert(
        &self,
        table: &TableId,
        key_columns: &[ColumnId],
        non_key_columns: &[ColumnId],
    ) -> Result<String> {
        builder::upsert::build_merge(self, table, key_columns, non_key_columns)
    }

    fn column_definition(
        &self,
        metadata: &dyn ColumnMetadata,
        attributes: ColumnAttributes,
    ) -> ColumnDefinition {
        introspect::column_definition(metadata, attributes)
    }

    fn column_converter(&self, mapping: &ColumnMapping) -> Option<ColumnConverter> {
        introspect::column_converter(mapping, self.config.time_zone)
    }

    fn add_field_to_schema(
        &self,
        column: &ColumnDefinition,
        builder: &mut SchemaBuilder,
    ) -> Result<Option<String>> {
        introspect::add_field_to_schema(column, builder)
    }

    fn sanitized_url(&self, url: &str) -> String {
        sanitize::sanitize_url(url)
    }
}

/// Registers [`SqlServerDialect`] for the Microsoft and jTDS drivers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerProvider;

impl DialectProvider for SqlServerProvider {
    fn name(&self) -> &'static str {
        "SqlServerDatabaseDialect"
    }

    fn subprotocols(&self) -> &'static [&'static str] {
        &["microsoft:sqlserver", "sqlserver", "jtds:sqlserver"]
    }

    fn create(&self, config: &DialectConfig) -> Box<dyn DatabaseDialect> {
        Box::new(SqlServerDialect::new(config.clone()))
    }
}
