//! SQL Server statement builders.

pub mod ddl;
pub mod upsert;
