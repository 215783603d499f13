//! Column introspection through the generic dialect.

mod common;
use common::*;

use chrono::{NaiveDate, TimeZone, Utc};
use sinkql_core::{
    AutoIncrement, ColumnAttributes, ColumnMapping, DatabaseDialect, DialectConfig, GenericDialect,
    JdbcType, NoMetadata, Nullability, ResultRow, SchemaBuilder, SchemaType, SqlValue, Value,
};

#[test]
fn test_column_definition_keeps_attributes() {
    let d = GenericDialect::default();
    let mut attrs = ColumnAttributes::new(users().column("id"), JdbcType::BIGINT, "bigint");
    attrs.auto_increment = AutoIncrement::Yes;
    attrs.nullability = Nullability::NotNull;
    let def = d.column_definition(&NoMetadata, attrs.clone());
    assert_eq!(def.attributes(), &attrs);
    assert!(!def.is_optional());
}

#[test]
fn test_schema_from_result_columns() {
    let d = GenericDialect::default();
    let columns = [
        column("id", JdbcType::BIGINT, Nullability::NotNull),
        column("name", JdbcType::NVARCHAR, Nullability::Nullable),
        column("price", JdbcType::DECIMAL, Nullability::Unknown),
        column("created", JdbcType::TIMESTAMP, Nullability::NotNull),
    ];
    let mut builder = SchemaBuilder::struct_builder();
    let ((), warnings) = count_warnings(|| {
        for c in &columns {
            assert!(d.add_field_to_schema(c, &mut builder).unwrap().is_some());
        }
    });
    assert_eq!(warnings, 0);

    let schema = builder.build();
    let types: Vec<_> = schema
        .fields()
        .iter()
        .map(|f| (f.name(), f.schema().schema_type(), f.schema().is_optional()))
        .collect();
    assert_eq!(
        types,
        [
            ("id", SchemaType::Int64, false),
            ("name", SchemaType::String, true),
            ("price", SchemaType::Bytes, true),
            ("created", SchemaType::Int64, false),
        ]
    );
}

#[test]
fn test_unsupported_column_type_warns_once() {
    let d = GenericDialect::default();
    let mut builder = SchemaBuilder::struct_builder();
    let (added, warnings) = count_warnings(|| {
        d.add_field_to_schema(&column("geo", JdbcType::OTHER, Nullability::Nullable), &mut builder)
    });
    assert_eq!(added.unwrap(), None);
    assert_eq!(warnings, 1);
    assert!(builder.fields().is_empty());
}

#[test]
fn test_aliased_columns_use_alias() {
    let d = GenericDialect::default();
    let attrs = ColumnAttributes::new(
        users().column("name").with_alias("display"),
        JdbcType::VARCHAR,
        "varchar",
    );
    let mut builder = SchemaBuilder::struct_builder();
    let name = d
        .add_field_to_schema(&attrs.into(), &mut builder)
        .unwrap();
    assert_eq!(name.as_deref(), Some("display"));
}

#[test]
fn test_timestamp_converter_uses_configured_zone() {
    let zone = sinkql_core::config::parse_time_zone("-03:00").unwrap();
    let d = GenericDialect::new(DialectConfig {
        time_zone: zone,
        ..DialectConfig::default()
    });
    let mapping = ColumnMapping::new(column("ts", JdbcType::TIMESTAMP, Nullability::NotNull), 1);
    let convert = d.column_converter(&mapping).unwrap();

    let values = vec![SqlValue::Timestamp(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap(),
    )];
    let row: &dyn ResultRow = &values;
    assert_eq!(
        convert(row).unwrap(),
        Value::Timestamp(Utc.with_ymd_and_hms(2024, 6, 2, 0, 30, 0).unwrap())
    );
}

#[test]
fn test_converter_reports_missing_column() {
    let d = GenericDialect::default();
    let mapping = ColumnMapping::new(column("id", JdbcType::INTEGER, Nullability::NotNull), 3);
    let convert = d.column_converter(&mapping).unwrap();
    let values = vec![SqlValue::Int(1)];
    let row: &dyn ResultRow = &values;
    let err = convert(row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "column index 3 is out of range (row has 1 columns)"
    );
}
