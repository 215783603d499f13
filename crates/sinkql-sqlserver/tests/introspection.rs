//! Column introspection through the SQL Server dialect.

mod common;
use common::*;

use sinkql_core::{
    AutoIncrement, ColumnAttributes, ColumnMapping, DatabaseDialect, DialectConfig, JdbcType,
    Nullability, ResultRow, SchemaBuilder, SchemaType, SqlValue, Value,
};
use sinkql_sqlserver::{AUTO_INCREMENT_POSITION, DATETIMEOFFSET, SqlServerDialect};

fn attributes(name: &str, jdbc_type: JdbcType) -> ColumnAttributes {
    ColumnAttributes::new(users().column(name), jdbc_type, "test")
}

fn metadata_row(flag: Option<&str>) -> Vec<Option<String>> {
    let mut values = vec![Some(String::from("x")); AUTO_INCREMENT_POSITION];
    values[AUTO_INCREMENT_POSITION - 1] = flag.map(String::from);
    values
}

#[test]
fn test_auto_increment_from_metadata() {
    let d = dialect();
    let row = SqlServerDialect::metadata_row(metadata_row(Some("YES")));
    let def = d.column_definition(&row, attributes("id", JdbcType::INTEGER));
    assert_eq!(def.auto_increment(), AutoIncrement::Yes);

    let row = SqlServerDialect::metadata_row(metadata_row(Some("no")));
    let mut attrs = attributes("id", JdbcType::INTEGER);
    attrs.auto_increment = AutoIncrement::Yes;
    assert_eq!(
        d.column_definition(&row, attrs).auto_increment(),
        AutoIncrement::No
    );
}

#[test]
fn test_probe_failure_warns_once_and_keeps_attribute() {
    let d = dialect();
    // A short row: position 22 does not exist.
    let row = SqlServerDialect::metadata_row(vec![Some(String::from("orders")); 4]);
    let mut attrs = attributes("id", JdbcType::INTEGER);
    attrs.auto_increment = AutoIncrement::No;
    attrs.nullability = Nullability::NotNull;

    let (def, warnings) = count_warnings(|| d.column_definition(&row, attrs.clone()));

    assert_eq!(warnings, 1);
    assert_eq!(def.auto_increment(), AutoIncrement::No);
    assert_eq!(def.attributes(), &attrs);
}

#[test]
fn test_absent_flag_does_not_warn() {
    let d = dialect();
    let row = SqlServerDialect::metadata_row(metadata_row(None));
    let (def, warnings) =
        count_warnings(|| d.column_definition(&row, attributes("id", JdbcType::INTEGER)));
    assert_eq!(warnings, 0);
    assert_eq!(def.auto_increment(), AutoIncrement::Unknown);
}

#[test]
fn test_datetimeoffset_columns() {
    let zone = sinkql_core::config::parse_time_zone("+09:00").unwrap();
    let d = SqlServerDialect::new(DialectConfig {
        time_zone: zone,
        ..DialectConfig::default()
    });

    let mut attrs = attributes("placed_at", DATETIMEOFFSET);
    attrs.nullability = Nullability::Nullable;
    let column = d.column_definition(&sinkql_core::NoMetadata, attrs);

    let mut builder = SchemaBuilder::struct_builder();
    let name = d.add_field_to_schema(&column, &mut builder).unwrap();
    assert_eq!(name.as_deref(), Some("placed_at"));
    let field = &builder.fields()[0];
    assert_eq!(field.schema().schema_type(), SchemaType::Int64);
    assert!(field.schema().is_optional());

    let convert = d
        .column_converter(&ColumnMapping::new(column, 1))
        .unwrap();
    let values = vec![SqlValue::Text(String::from(
        "2024-05-01 18:00:00.1234567 +09:00",
    ))];
    let row: &dyn ResultRow = &values;
    let Value::Timestamp(ts) = convert(row).unwrap() else {
        panic!("expected a timestamp");
    };
    assert_eq!(ts.to_rfc3339(), "2024-05-01T09:00:00.123456700+00:00");
}

#[test]
fn test_unsupported_types_warn_through_generic_base() {
    let d = dialect();
    let column = d.column_definition(
        &sinkql_core::NoMetadata,
        attributes("geo", JdbcType::OTHER),
    );
    let mut builder = SchemaBuilder::struct_builder();
    let (added, warnings) = count_warnings(|| d.add_field_to_schema(&column, &mut builder));
    assert_eq!(added.unwrap(), None);
    assert_eq!(warnings, 1);
}
