//! Generic SQL dialect.
//!
//! The free functions here are the base behaviour of every dialect: the
//! [`DatabaseDialect`] default methods call them, and concrete dialects call
//! them directly for the cases they do not handle themselves.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, warn};

use super::{DatabaseDialect, DropOptions};
use crate::column::{ColumnAttributes, ColumnDefinition, ColumnMapping, JdbcType};
use crate::config::DialectConfig;
use crate::error::{DialectError, Result};
use crate::expression::ExpressionBuilder;
use crate::identifier::{ColumnId, TableId};
use crate::row::{ColumnConverter, ResultRow};
use crate::schema::{Schema, SchemaBuilder, SchemaType, SinkRecordField};
use crate::types::{TypeMapper, TypeTable, default_types};
use crate::value::{SqlValue, Value};

/// A generic SQL dialect using ANSI SQL standards.
#[derive(Debug, Clone)]
pub struct GenericDialect {
    config: DialectConfig,
    types: TypeMapper,
}

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub fn new(config: DialectConfig) -> Self {
        Self {
            config,
            types: TypeMapper::new(TypeTable::new(), default_types()),
        }
    }
}

impl Default for GenericDialect {
    fn default() -> Self {
        Self::new(DialectConfig::default())
    }
}

impl DatabaseDialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn config(&self) -> &DialectConfig {
        &self.config
    }

    fn type_mapper(&self) -> &TypeMapper {
        &self.types
    }
}

/// Fails unless `columns` has at least one entry.
///
/// # Errors
///
/// Returns [`DialectError::InvalidInput`] naming `operation` and `what`.
pub fn require_columns(columns: &[ColumnId], operation: &str, what: &str) -> Result<()> {
    if columns.is_empty() {
        return Err(DialectError::InvalidInput(format!(
            "{operation} requires at least one {what} column"
        )));
    }
    Ok(())
}

/// Writes `<name> <type>` followed by a default or a nullability clause.
///
/// # Errors
///
/// Returns an error if the field's type is unmapped.
pub fn write_column_spec<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    builder: &mut ExpressionBuilder<'_>,
    field: &SinkRecordField,
) -> Result<()> {
    let sql_type = dialect.sql_type(field)?;
    builder
        .append_column_name(field.name())
        .append(" ")
        .append(&sql_type);
    if let Some(default) = field.default_value() {
        builder.append(" DEFAULT ").append(&default.to_sql());
    } else if field.is_optional() {
        builder.append(" NULL");
    } else {
        builder.append(" NOT NULL");
    }
    Ok(())
}

/// Writes the column specs of `fields`, each on its own line, separated by
/// commas.
///
/// # Errors
///
/// Returns an error if any field's type is unmapped.
pub fn write_columns_spec<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    builder: &mut ExpressionBuilder<'_>,
    fields: &[SinkRecordField],
) -> Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            builder.append(",");
        }
        builder.append("\n");
        write_column_spec(dialect, builder, field)?;
    }
    Ok(())
}

fn require_fields(fields: &[SinkRecordField], operation: &str) -> Result<()> {
    if fields.is_empty() {
        return Err(DialectError::InvalidInput(format!(
            "{operation} requires at least one field"
        )));
    }
    Ok(())
}

/// `CREATE TABLE <t> (<specs>[, PRIMARY KEY(<pk>)])`.
///
/// # Errors
///
/// Returns an error if `fields` is empty or a field type is unmapped.
pub fn build_create_table<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    fields: &[SinkRecordField],
) -> Result<String> {
    require_fields(fields, "CREATE TABLE")?;
    let mut builder = dialect.expression_builder();
    builder.append("CREATE TABLE ").append_table(table).append(" (");
    write_columns_spec(dialect, &mut builder, fields)?;

    let primary_key: Vec<&str> = fields
        .iter()
        .filter(|f| f.is_primary_key())
        .map(SinkRecordField::name)
        .collect();
    if !primary_key.is_empty() {
        builder
            .append(",\nPRIMARY KEY(")
            .append_list(",", primary_key, |b, name| {
                b.append_column_name(name);
            })
            .append(")");
    }
    builder.append(")");
    Ok(builder.build())
}

/// `DROP TABLE [IF EXISTS ]<t>[ CASCADE]`.
pub fn build_drop_table<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    options: DropOptions,
) -> String {
    let mut builder = dialect.expression_builder();
    builder.append("DROP TABLE ");
    if options.is_if_exists() {
        builder.append("IF EXISTS ");
    }
    builder.append_table(table);
    if options.is_cascade() {
        builder.append(" CASCADE");
    }
    builder.build()
}

/// One `ALTER TABLE <t> ADD <spec>` statement per field.
///
/// # Errors
///
/// Returns an error if `fields` is empty or a field type is unmapped.
pub fn build_alter_table<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    fields: &[SinkRecordField],
) -> Result<Vec<String>> {
    require_fields(fields, "ALTER TABLE")?;
    fields
        .iter()
        .map(|field| {
            let mut builder = dialect.expression_builder();
            builder.append("ALTER TABLE ").append_table(table).append(" ADD ");
            write_column_spec(dialect, &mut builder, field)?;
            Ok(builder.build())
        })
        .collect()
}

/// `INSERT INTO <t>(<keys>,<non-keys>) VALUES(?,...)`.
///
/// # Errors
///
/// Returns [`DialectError::InvalidInput`] if there are no columns.
pub fn build_insert<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    key_columns: &[ColumnId],
    non_key_columns: &[ColumnId],
) -> Result<String> {
    let columns: Vec<&ColumnId> = key_columns.iter().chain(non_key_columns).collect();
    if columns.is_empty() {
        return Err(DialectError::InvalidInput(String::from(
            "INSERT requires at least one column",
        )));
    }
    let mut builder = dialect.expression_builder();
    builder
        .append("INSERT INTO ")
        .append_table(table)
        .append("(")
        .append_list(",", columns.iter().copied(), |b, c| {
            b.append_column(c);
        })
        .append(") VALUES(")
        .append_list(",", &columns, |b, _| {
            b.append("?");
        })
        .append(")");
    Ok(builder.build())
}

/// `UPDATE <t> SET <n> = ?, ... WHERE <k> = ? AND ...`.
///
/// # Errors
///
/// Returns [`DialectError::InvalidInput`] if either column list is empty.
pub fn build_update<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    key_columns: &[ColumnId],
    non_key_columns: &[ColumnId],
) -> Result<String> {
    require_columns(key_columns, "UPDATE", "key")?;
    require_columns(non_key_columns, "UPDATE", "non-key")?;
    let mut builder = dialect.expression_builder();
    builder
        .append("UPDATE ")
        .append_table(table)
        .append(" SET ")
        .append_list(", ", non_key_columns, |b, c| {
            b.append_column(c).append(" = ?");
        })
        .append(" WHERE ");
    append_key_predicates(&mut builder, key_columns);
    Ok(builder.build())
}

/// `DELETE FROM <t> WHERE <k1> = ? AND <k2> = ?`.
///
/// # Errors
///
/// Returns [`DialectError::InvalidInput`] if `key_columns` is empty.
pub fn build_delete<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    key_columns: &[ColumnId],
) -> Result<String> {
    require_columns(key_columns, "DELETE", "key")?;
    let mut builder = dialect.expression_builder();
    builder.append("DELETE FROM ").append_table(table).append(" WHERE ");
    append_key_predicates(&mut builder, key_columns);
    Ok(builder.build())
}

fn append_key_predicates(builder: &mut ExpressionBuilder<'_>, key_columns: &[ColumnId]) {
    builder.append_list(" AND ", key_columns, |b, c| {
        b.append_column(c).append(" = ?");
    });
}

/// Builds the definition from the attributes unchanged.
#[must_use]
pub fn column_definition(attributes: ColumnAttributes) -> ColumnDefinition {
    ColumnDefinition::from(attributes)
}

fn mismatch(column: usize, expected: &'static str, found: &SqlValue) -> DialectError {
    DialectError::Conversion {
        column,
        expected,
        found: found.kind().to_string(),
    }
}

/// Normalises a date/time value to UTC. Values without an offset are taken
/// to be local to `zone`.
///
/// # Errors
///
/// Returns [`DialectError::Conversion`] for values that are not timestamps.
pub fn timestamp_to_utc(column: usize, value: SqlValue, zone: FixedOffset) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::TimestampTz(ts) => Ok(Value::Timestamp(ts.with_timezone(&Utc))),
        SqlValue::Timestamp(naive) => local_to_utc(column, &naive, zone),
        other => Err(mismatch(column, "timestamp", &other)),
    }
}

fn local_to_utc(column: usize, naive: &NaiveDateTime, zone: FixedOffset) -> Result<Value> {
    zone.from_local_datetime(naive)
        .single()
        .map(|ts: DateTime<FixedOffset>| Value::Timestamp(ts.with_timezone(&Utc)))
        .ok_or_else(|| DialectError::Conversion {
            column,
            expected: "timestamp",
            found: naive.to_string(),
        })
}

fn extract(column: usize, convert: fn(usize, SqlValue) -> Result<Value>) -> ColumnConverter {
    Box::new(move |row: &dyn ResultRow| convert(column, row.value(column)?))
}

fn to_int(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Int(i) => Ok(Value::Int(i)),
        SqlValue::Bool(b) => Ok(Value::Int(i64::from(b))),
        other => Err(mismatch(column, "integer", &other)),
    }
}

fn to_bool(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Bool(b) => Ok(Value::Bool(b)),
        SqlValue::Int(i) => Ok(Value::Bool(i != 0)),
        other => Err(mismatch(column, "boolean", &other)),
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_float(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Float(f) => Ok(Value::Float(f)),
        SqlValue::Int(i) => Ok(Value::Float(i as f64)),
        other => Err(mismatch(column, "float", &other)),
    }
}

fn to_decimal(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Decimal(s) | SqlValue::Text(s) => Ok(Value::Decimal(s)),
        SqlValue::Int(i) => Ok(Value::Decimal(i.to_string())),
        other => Err(mismatch(column, "decimal", &other)),
    }
}

fn to_text(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Text(s) => Ok(Value::Text(s)),
        other => Err(mismatch(column, "text", &other)),
    }
}

fn to_bytes(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Blob(b) => Ok(Value::Bytes(b)),
        other => Err(mismatch(column, "bytes", &other)),
    }
}

fn to_date(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Date(d) => Ok(Value::Date(d)),
        SqlValue::Timestamp(ts) => Ok(Value::Date(ts.date())),
        other => Err(mismatch(column, "date", &other)),
    }
}

fn to_time(column: usize, value: SqlValue) -> Result<Value> {
    match value {
        SqlValue::Null => Ok(Value::Null),
        SqlValue::Time(t) => Ok(Value::Time(t)),
        other => Err(mismatch(column, "time", &other)),
    }
}

/// Returns the converter for the column's JDBC type, or `None` if the type
/// is not supported.
#[must_use]
pub fn column_converter(mapping: &ColumnMapping, zone: FixedOffset) -> Option<ColumnConverter> {
    let column = mapping.column_number();
    let converter = match mapping.column().jdbc_type() {
        JdbcType::BOOLEAN => extract(column, to_bool),
        JdbcType::BIT
        | JdbcType::TINYINT
        | JdbcType::SMALLINT
        | JdbcType::INTEGER
        | JdbcType::BIGINT => extract(column, to_int),
        JdbcType::REAL | JdbcType::FLOAT | JdbcType::DOUBLE => extract(column, to_float),
        JdbcType::NUMERIC | JdbcType::DECIMAL => extract(column, to_decimal),
        JdbcType::CHAR
        | JdbcType::VARCHAR
        | JdbcType::LONGVARCHAR
        | JdbcType::NCHAR
        | JdbcType::NVARCHAR
        | JdbcType::LONGNVARCHAR
        | JdbcType::CLOB
        | JdbcType::NCLOB
        | JdbcType::SQLXML => extract(column, to_text),
        JdbcType::BINARY | JdbcType::VARBINARY | JdbcType::LONGVARBINARY | JdbcType::BLOB => {
            extract(column, to_bytes)
        }
        JdbcType::DATE => extract(column, to_date),
        JdbcType::TIME => extract(column, to_time),
        JdbcType::TIMESTAMP => Box::new(move |row: &dyn ResultRow| {
            timestamp_to_utc(column, row.value(column)?, zone)
        }),
        _ => return None,
    };
    Some(converter)
}

/// Returns the connector schema for a column's JDBC type, or `None` if the
/// type is not supported.
#[must_use]
pub fn schema_for(column: &ColumnDefinition) -> Option<Schema> {
    let signed = column.is_signed_number();
    let schema = match column.jdbc_type() {
        JdbcType::BOOLEAN => Schema::new(SchemaType::Boolean),
        // BIT may be wider than one bit on some databases.
        JdbcType::BIT => Schema::new(SchemaType::Int8),
        JdbcType::TINYINT if signed => Schema::new(SchemaType::Int8),
        JdbcType::TINYINT => Schema::new(SchemaType::Int16),
        JdbcType::SMALLINT if signed => Schema::new(SchemaType::Int16),
        JdbcType::SMALLINT => Schema::new(SchemaType::Int32),
        JdbcType::INTEGER if signed => Schema::new(SchemaType::Int32),
        JdbcType::INTEGER | JdbcType::BIGINT => Schema::new(SchemaType::Int64),
        JdbcType::REAL => Schema::new(SchemaType::Float32),
        JdbcType::FLOAT | JdbcType::DOUBLE => Schema::new(SchemaType::Float64),
        JdbcType::NUMERIC | JdbcType::DECIMAL => Schema::decimal(column.scale()),
        JdbcType::CHAR
        | JdbcType::VARCHAR
        | JdbcType::LONGVARCHAR
        | JdbcType::NCHAR
        | JdbcType::NVARCHAR
        | JdbcType::LONGNVARCHAR
        | JdbcType::CLOB
        | JdbcType::NCLOB
        | JdbcType::SQLXML => Schema::new(SchemaType::String),
        JdbcType::BINARY | JdbcType::VARBINARY | JdbcType::LONGVARBINARY | JdbcType::BLOB => {
            Schema::new(SchemaType::Bytes)
        }
        JdbcType::DATE => Schema::date(),
        JdbcType::TIME => Schema::time(),
        JdbcType::TIMESTAMP => Schema::timestamp(),
        _ => return None,
    };
    Some(schema.with_optional(column.is_optional()))
}

/// Adds a field for the column under its alias or name.
///
/// # Errors
///
/// Returns an error if `builder` already holds a field with that name.
pub fn add_field_to_schema(
    column: &ColumnDefinition,
    builder: &mut SchemaBuilder,
) -> Result<Option<String>> {
    let field_name = column.id().alias_or_name();
    if column.jdbc_type() == JdbcType::NULL {
        debug!(column = %column.id(), "JDBC type 'NULL' not currently supported");
        return Ok(None);
    }
    let Some(schema) = schema_for(column) else {
        warn!(
            column = %column.id(),
            jdbc_type = %column.jdbc_type(),
            type_name = column.type_name(),
            "JDBC type not currently supported"
        );
        return Ok(None);
    };
    builder.field(field_name, schema)?;
    Ok(Some(field_name.to_string()))
}
