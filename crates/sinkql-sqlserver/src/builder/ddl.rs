//! SQL Server `DROP TABLE` and `ALTER TABLE` builders.

use sinkql_core::dialect::generic::write_columns_spec;
use sinkql_core::{DatabaseDialect, DialectError, DropOptions, Result, SinkRecordField, TableId};

/// `[IF OBJECT_ID(N'<t>', 'U') IS NOT NULL ]DROP TABLE <t>[ CASCADE]`.
///
/// The existence guard works on every SQL Server version, unlike
/// `DROP TABLE IF EXISTS` which needs 2016 or later. The name is passed as
/// an `nvarchar` literal so it is not narrowed to the database code page.
pub fn drop_table<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    options: DropOptions,
) -> String {
    let mut builder = dialect.expression_builder();
    if options.is_if_exists() {
        let name = builder.render_table(table);
        builder
            .append("IF OBJECT_ID(N")
            .append_string_literal(&name)
            .append(", 'U') IS NOT NULL ");
    }
    builder.append("DROP TABLE ").append_table(table);
    if options.is_cascade() {
        builder.append(" CASCADE");
    }
    builder.build()
}

/// A single `ALTER TABLE <t> ADD` statement adding every field.
///
/// # Errors
///
/// Returns [`DialectError::InvalidInput`] if `fields` is empty, or an error
/// if a field's type is unmapped.
pub fn alter_table<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    fields: &[SinkRecordField],
) -> Result<Vec<String>> {
    if fields.is_empty() {
        return Err(DialectError::InvalidInput(String::from(
            "ALTER TABLE requires at least one field",
        )));
    }
    let mut builder = dialect.expression_builder();
    builder.append("ALTER TABLE ").append_table(table).append(" ADD");
    write_columns_spec(dialect, &mut builder, fields)?;
    Ok(vec![builder.build()])
}
