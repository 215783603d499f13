//! SQL Server column introspection.
//!
//! The Microsoft driver reports `IS_AUTOINCREMENT` as a `YES`/`NO` string in
//! its column metadata rather than through the generic attributes, and it
//! exposes `DATETIMEOFFSET` columns under a vendor type code. Everything else
//! is handled by the generic base.

use chrono::{DateTime, FixedOffset, Utc};
use sinkql_core::dialect::generic;
use sinkql_core::metadata::{ColumnMetadata, MetadataCapability};
use sinkql_core::row::{ColumnConverter, ResultRow};
use sinkql_core::{
    AutoIncrement, ColumnAttributes, ColumnDefinition, ColumnMapping, DialectError, Result, Schema,
    SchemaBuilder, SqlValue, Value,
};
use tracing::warn;

use crate::dialect::DATETIMEOFFSET;

/// Refines the auto-increment attribute from the driver metadata, then
/// builds the definition. A failed probe is logged and leaves the attribute
/// as it was.
#[must_use]
pub fn column_definition(
    metadata: &dyn ColumnMetadata,
    mut attributes: ColumnAttributes,
) -> ColumnDefinition {
    match metadata.probe(MetadataCapability::AutoIncrement) {
        Ok(Some(flag)) if flag.eq_ignore_ascii_case("yes") => {
            attributes.auto_increment = AutoIncrement::Yes;
        }
        Ok(Some(flag)) if flag.eq_ignore_ascii_case("no") => {
            attributes.auto_increment = AutoIncrement::No;
        }
        Ok(_) => {}
        Err(error) => {
            warn!(
                column = %attributes.id,
                %error,
                "Unable to get auto incrementing column information"
            );
        }
    }
    generic::column_definition(attributes)
}

/// Parses the driver's textual `DATETIMEOFFSET` form,
/// `YYYY-MM-DD hh:mm:ss[.fffffff] ±hh:mm`, or RFC 3339.
fn parse_datetimeoffset(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f %:z")
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .ok()
}

fn datetimeoffset_to_utc(column: usize, value: SqlValue, zone: FixedOffset) -> Result<Value> {
    match value {
        SqlValue::Text(text) => parse_datetimeoffset(&text)
            .map(|ts| Value::Timestamp(ts.with_timezone(&Utc)))
            .ok_or(DialectError::Conversion {
                column,
                expected: "datetimeoffset",
                found: text,
            }),
        other => generic::timestamp_to_utc(column, other, zone),
    }
}

/// Returns the converter for `DATETIMEOFFSET` columns, or the generic one.
#[must_use]
pub fn column_converter(mapping: &ColumnMapping, zone: FixedOffset) -> Option<ColumnConverter> {
    if mapping.column().jdbc_type() != DATETIMEOFFSET {
        return generic::column_converter(mapping, zone);
    }
    let column = mapping.column_number();
    Some(Box::new(move |row: &dyn ResultRow| {
        datetimeoffset_to_utc(column, row.value(column)?, zone)
    }))
}

/// Maps `DATETIMEOFFSET` columns to a timestamp field, everything else as
/// the generic base does.
///
/// # Errors
///
/// Returns an error if `builder` already holds a field with that name.
pub fn add_field_to_schema(
    column: &ColumnDefinition,
    builder: &mut SchemaBuilder,
) -> Result<Option<String>> {
    if column.jdbc_type() != DATETIMEOFFSET {
        return generic::add_field_to_schema(column, builder);
    }
    let field_name = column.id().alias_or_name();
    builder.field(
        field_name,
        Schema::timestamp().with_optional(column.is_optional()),
    )?;
    Ok(Some(field_name.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use sinkql_core::{JdbcType, Nullability, ProbeError, SchemaType, TableId};

    use super::*;
    use crate::SqlServerDialect;

    fn attributes(jdbc_type: JdbcType) -> ColumnAttributes {
        ColumnAttributes::new(TableId::unqualified("orders").column("c"), jdbc_type, "t")
    }

    fn metadata(flag: Option<&str>) -> impl ColumnMetadata {
        let mut values = vec![None; 22];
        values[21] = flag.map(String::from);
        SqlServerDialect::metadata_row(values)
    }

    struct Failing;

    impl ColumnMetadata for Failing {
        fn probe(
            &self,
            _capability: MetadataCapability,
        ) -> std::result::Result<Option<String>, ProbeError> {
            Err(ProbeError::Driver(String::from("The index 22 is out of range.")))
        }
    }

    #[test]
    fn test_auto_increment_flag() {
        let cases = [
            (Some("YES"), AutoIncrement::Yes),
            (Some("yes"), AutoIncrement::Yes),
            (Some("No"), AutoIncrement::No),
            (Some("maybe"), AutoIncrement::Unknown),
            (None, AutoIncrement::Unknown),
        ];
        for (flag, expected) in cases {
            let def = column_definition(&metadata(flag), attributes(JdbcType::INTEGER));
            assert_eq!(def.auto_increment(), expected, "{flag:?}");
        }
    }

    #[test]
    fn test_probe_failure_keeps_attribute() {
        let mut attrs = attributes(JdbcType::INTEGER);
        attrs.auto_increment = AutoIncrement::No;
        let def = column_definition(&Failing, attrs);
        assert_eq!(def.auto_increment(), AutoIncrement::No);
    }

    #[test]
    fn test_parse_datetimeoffset() {
        let expected = FixedOffset::east_opt(5 * 3600 + 30 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 10, 8, 15, 0)
            .unwrap();
        assert_eq!(
            parse_datetimeoffset("2024-03-10 08:15:00 +05:30"),
            Some(expected)
        );
        assert_eq!(
            parse_datetimeoffset("2024-03-10 08:15:00.0000000 +05:30"),
            Some(expected)
        );
        assert_eq!(
            parse_datetimeoffset("2024-03-10T08:15:00+05:30"),
            Some(expected)
        );
        assert_eq!(parse_datetimeoffset("yesterday"), None);
    }

    #[test]
    fn test_datetimeoffset_converter() {
        let zone = FixedOffset::east_opt(3600).unwrap();
        let mut def = attributes(DATETIMEOFFSET);
        def.nullability = Nullability::Nullable;
        let mapping = ColumnMapping::new(ColumnDefinition::from(def), 2);
        let convert = column_converter(&mapping, zone).unwrap();

        let local = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        let midnight = Value::Timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let values = vec![SqlValue::Null, SqlValue::Timestamp(local)];
        let row: &dyn ResultRow = &values;
        assert_eq!(convert(row).unwrap(), midnight);

        let values = vec![
            SqlValue::Null,
            SqlValue::Text(String::from("2024-01-01 02:00:00 +02:00")),
        ];
        let row: &dyn ResultRow = &values;
        assert_eq!(convert(row).unwrap(), midnight);

        let values = vec![SqlValue::Int(1), SqlValue::Null];
        let row: &dyn ResultRow = &values;
        assert_eq!(convert(row).unwrap(), Value::Null);

        let values = vec![SqlValue::Null, SqlValue::Text(String::from("soon"))];
        let row: &dyn ResultRow = &values;
        assert!(matches!(
            convert(row),
            Err(DialectError::Conversion { column: 2, .. })
        ));
    }

    #[test]
    fn test_other_types_use_generic_converter() {
        let mapping = ColumnMapping::new(ColumnDefinition::from(attributes(JdbcType::BIT)), 1);
        let convert = column_converter(&mapping, FixedOffset::east_opt(0).unwrap()).unwrap();
        let values = vec![SqlValue::Bool(true)];
        let row: &dyn ResultRow = &values;
        assert_eq!(convert(row).unwrap(), Value::Int(1));
    }

    #[test]
    fn test_datetimeoffset_field() {
        let mut attrs = attributes(DATETIMEOFFSET);
        attrs.nullability = Nullability::NotNull;
        let mut builder = SchemaBuilder::struct_builder();
        let name = add_field_to_schema(&ColumnDefinition::from(attrs), &mut builder).unwrap();
        assert_eq!(name.as_deref(), Some("c"));

        let schema = builder.fields()[0].schema();
        assert_eq!(schema.schema_type(), SchemaType::Int64);
        assert_eq!(schema.name(), Some(sinkql_core::schema::logical::TIMESTAMP));
        assert!(!schema.is_optional());
    }
}
