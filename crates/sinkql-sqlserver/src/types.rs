//! SQL Server column types.

use sinkql_core::schema::{SchemaType, SinkRecordField, logical};
use sinkql_core::types::{TypeTable, decimal_scale};
use sinkql_core::Result;

fn decimal(field: &SinkRecordField) -> Result<String> {
    Ok(format!("decimal(38,{})", decimal_scale(field)?))
}

/// The entries SQL Server registers over the default type table.
#[must_use]
pub fn sql_server_types() -> TypeTable {
    TypeTable::new()
        .logical_with(logical::DECIMAL, decimal)
        .logical(logical::DATE, "date")
        .logical(logical::TIME, "time")
        .logical(logical::TIMESTAMP, "datetime2")
        .primitive(SchemaType::Int8, "tinyint")
        .primitive(SchemaType::Int16, "smallint")
        .primitive(SchemaType::Int32, "int")
        .primitive(SchemaType::Int64, "bigint")
        .primitive(SchemaType::Float32, "real")
        .primitive(SchemaType::Float64, "float")
        .primitive(SchemaType::Boolean, "bit")
        .primitive(SchemaType::String, "varchar(max)")
        .primitive(SchemaType::Bytes, "varbinary(max)")
}
