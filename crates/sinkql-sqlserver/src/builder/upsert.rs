//! SQL Server upsert (`MERGE ... WITH (HOLDLOCK)`) builder.

use sinkql_core::dialect::generic::require_columns;
use sinkql_core::{ColumnId, DatabaseDialect, ExpressionBuilder, Result, TableId};

/// `target.<c>=incoming.<c>`
fn match_on(builder: &mut ExpressionBuilder<'_>, column: &ColumnId) {
    builder
        .append("target.")
        .append_column_name(column.name())
        .append("=incoming.")
        .append_column_name(column.name());
}

/// `<c>=incoming.<c>`
fn update_from_incoming(builder: &mut ExpressionBuilder<'_>, column: &ColumnId) {
    builder
        .append_column_name(column.name())
        .append("=incoming.")
        .append_column_name(column.name());
}

/// Builds a single-statement upsert that merges one row of parameters into
/// `table`, keyed by `key_columns`.
///
/// `HOLDLOCK` keeps concurrent merges on the same key from both taking the
/// insert branch. The statement ends with the `;` SQL Server requires after
/// `MERGE`. Parameters bind keys first, then non-keys.
///
/// # Errors
///
/// Returns [`sinkql_core::DialectError::InvalidInput`] if `key_columns` is
/// empty.
pub fn build_merge<D: DatabaseDialect + ?Sized>(
    dialect: &D,
    table: &TableId,
    key_columns: &[ColumnId],
    non_key_columns: &[ColumnId],
) -> Result<String> {
    require_columns(key_columns, "upsert", "key")?;

    let mut builder = dialect.expression_builder();
    builder
        .append("merge into ")
        .append_table(table)
        .append(" with (HOLDLOCK) AS target using (select ")
        .append_list(", ", key_columns.iter().chain(non_key_columns), |b, c| {
            b.append("? AS ").append_column(c);
        })
        .append(") AS incoming on (")
        .append_list(" and ", key_columns, match_on)
        .append(")");

    if !non_key_columns.is_empty() {
        builder
            .append(" when matched then update set ")
            .append_list(",", non_key_columns, update_from_incoming);
    }

    builder
        .append(" when not matched then insert (")
        .append_list(", ", non_key_columns.iter().chain(key_columns), |b, c| {
            b.append_column(c);
        })
        .append(") values (")
        .append_list(",", non_key_columns.iter().chain(key_columns), |b, c| {
            b.append("incoming.").append_column(c);
        })
        .append(");");
    Ok(builder.build())
}
