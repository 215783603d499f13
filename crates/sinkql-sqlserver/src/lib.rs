//! # sinkql-sqlserver
//!
//! Microsoft SQL Server dialect for `sinkql-core`.
//!
//! # How SQL Server differs from the generic dialect
//!
//! - **Identifier quoting**: identifiers are wrapped in square brackets
//!   (`[dbo].[users]`), with `]` escaped as `]]`. See [Delimited identifiers].
//! - **Catalogs**: the driver's catalog is the database and its schema is the
//!   owner (usually `dbo`), so tables are qualified as
//!   `[database].[owner].[table]`.
//! - **[MERGE]** instead of `INSERT ... ON CONFLICT`: upserts are a single
//!   `merge into ... with (HOLDLOCK)` statement, which must end with `;`.
//! - **DROP TABLE guard**: `IF OBJECT_ID(N'<t>', 'U') IS NOT NULL` works on
//!   every version, where `DROP TABLE IF EXISTS` needs SQL Server 2016.
//! - **[ALTER TABLE]**: several columns are added in one `ADD` clause.
//! - **Types**: `bit` for booleans, `varchar(max)`/`varbinary(max)` for
//!   strings and bytes, `datetime2` for timestamps.
//! - **[DATETIMEOFFSET]**: a vendor type (code -155) holding a timestamp
//!   with its UTC offset.
//! - **Connection URLs**: properties are `;`-separated, and `password`,
//!   `keyStoreSecret` and `gsscredential` carry secrets.
//!
//! [Delimited identifiers]: https://learn.microsoft.com/en-us/sql/relational-databases/databases/database-identifiers
//! [MERGE]: https://learn.microsoft.com/en-us/sql/t-sql/statements/merge-transact-sql
//! [ALTER TABLE]: https://learn.microsoft.com/en-us/sql/t-sql/statements/alter-table-transact-sql
//! [DATETIMEOFFSET]: https://learn.microsoft.com/en-us/sql/t-sql/data-types/datetimeoffset-transact-sql
//!
//! ## Example
//!
//! ```rust
//! use sinkql_core::{DatabaseDialect, DialectConfig, TableId};
//! use sinkql_sqlserver::SqlServerDialect;
//!
//! let dialect = SqlServerDialect::new(DialectConfig::default());
//! let table = TableId::new(None, Some("dbo"), "users");
//! let sql = dialect
//!     .build_upsert(&table, &[table.column("id")], &[table.column("name")])
//!     .unwrap();
//!
//! assert!(sql.starts_with("merge into [dbo].[users] with (HOLDLOCK)"));
//! assert!(sql.ends_with(";"));
//! ```

pub mod builder;
mod dialect;
pub mod introspect;
pub mod sanitize;
pub mod types;

pub use dialect::{
    AUTO_INCREMENT_POSITION, DATETIMEOFFSET, IDENTIFIER_RULES, SqlServerDialect, SqlServerProvider,
};
