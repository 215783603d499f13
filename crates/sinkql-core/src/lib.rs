//! # sinkql-core
//!
//! Dialect-aware SQL generation for JDBC-style sink and source connectors.
//!
//! This crate provides:
//! - A schema-to-SQL type mapper built from per-dialect delta tables
//! - DDL and parameterized DML builders (`CREATE`, `ALTER`, `DROP`,
//!   `INSERT`, `UPDATE`, `DELETE`, upsert) behind the [`DatabaseDialect`] trait
//! - Column introspection: capability probes over driver metadata, column
//!   value converters and connector schema construction
//! - Connection URL sanitisation for safe logging
//!
//! ## Building statements
//!
//! ```rust
//! use sinkql_core::{DatabaseDialect, DialectConfig, GenericDialect, TableId};
//!
//! let dialect = GenericDialect::new(DialectConfig::default());
//! let table = TableId::unqualified("users");
//! let keys = [table.column("id")];
//!
//! let sql = dialect.build_delete(&table, &keys).unwrap();
//! assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" = ?"#);
//! ```
//!
//! ## Type mapping
//!
//! Each dialect registers only the entries it changes; everything else
//! falls back to [`types::default_types`]. Unmapped schemas are reported as
//! [`DialectError::UnmappedType`]:
//!
//! ```rust
//! use sinkql_core::{DatabaseDialect, GenericDialect, Schema, SchemaType, SinkRecordField};
//!
//! let dialect = GenericDialect::default();
//! let amount = SinkRecordField::new("amount", Schema::decimal(2), false);
//! assert_eq!(dialect.sql_type(&amount).unwrap(), "DECIMAL(38,2)");
//!
//! let tags = SinkRecordField::new("tags", Schema::new(SchemaType::Array), false);
//! assert!(dialect.sql_type(&tags).is_err());
//! ```

pub mod column;
pub mod config;
pub mod dialect;
pub mod error;
pub mod expression;
pub mod identifier;
pub mod metadata;
pub mod provider;
pub mod row;
pub mod sanitize;
pub mod schema;
pub mod types;
pub mod value;

pub use column::{
    AutoIncrement, ColumnAttributes, ColumnDefinition, ColumnMapping, JdbcType, Mutability,
    Nullability,
};
pub use config::{DialectConfig, TimeZoneProvider};
pub use dialect::{DatabaseDialect, DropOptions, GenericDialect};
pub use error::{DialectError, ProbeError, Result, RowError};
pub use expression::ExpressionBuilder;
pub use identifier::{ColumnId, IdentifierRules, QuoteMethod, TableId};
pub use metadata::{ColumnMetadata, MetadataCapability, NoMetadata, PositionalMetadataRow};
pub use provider::{DialectProvider, DialectRegistry};
pub use row::{ColumnConverter, ResultRow};
pub use schema::{DefaultValue, Schema, SchemaBuilder, SchemaType, SinkRecordField};
pub use types::{TypeMapper, TypeRenderer, TypeTable};
pub use value::{SqlValue, Value};
