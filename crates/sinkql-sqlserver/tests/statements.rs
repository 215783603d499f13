//! Statements rendered by the SQL Server dialect.

mod common;
use common::*;

use sinkql_core::{
    DatabaseDialect, DialectError, DropOptions, Schema, SchemaType, SinkRecordField, TableId,
};

// ===================================================================
// Types
// ===================================================================

#[test]
fn test_decimal_scale_is_carried() {
    let field = SinkRecordField::new("price", Schema::decimal(4), false);
    assert_eq!(dialect().sql_type(&field).unwrap(), "decimal(38,4)");
}

#[test]
fn test_logical_and_primitive_types() {
    let d = dialect();
    let date = SinkRecordField::new("d", Schema::date(), false);
    let id = SinkRecordField::new("id", Schema::new(SchemaType::Int64), true);
    let flag = SinkRecordField::new(
        "flag",
        Schema::new(SchemaType::Boolean).with_name("com.example.Unknown"),
        false,
    );
    assert_eq!(d.sql_type(&date).unwrap(), "date");
    assert_eq!(d.sql_type(&id).unwrap(), "bigint");
    assert_eq!(d.sql_type(&flag).unwrap(), "bit");
}

#[test]
fn test_create_table_uses_sql_server_types() {
    let fields = vec![
        SinkRecordField::new("id", Schema::new(SchemaType::Int32), true),
        SinkRecordField::new("payload", Schema::new(SchemaType::Bytes).optional(), false),
        SinkRecordField::new("at", Schema::timestamp(), false),
    ];
    assert_eq!(
        dialect().build_create_table(&users(), &fields).unwrap(),
        "CREATE TABLE [dbo].[users] (\n\
         [id] int NOT NULL,\n\
         [payload] varbinary(max) NULL,\n\
         [at] datetime2 NOT NULL,\n\
         PRIMARY KEY([id]))"
    );
}

#[test]
fn test_unmapped_field_fails_create() {
    let fields = vec![SinkRecordField::new(
        "tags",
        Schema::new(SchemaType::Array),
        false,
    )];
    let err = dialect().build_create_table(&users(), &fields).unwrap_err();
    assert!(matches!(err, DialectError::UnmappedType { .. }));
}

// ===================================================================
// DDL
// ===================================================================

#[test]
fn test_drop_with_guard_and_cascade() {
    let sql = dialect().build_drop_table(
        &users(),
        DropOptions::new().if_exists(true).cascade(true),
    );
    assert!(sql.starts_with("IF OBJECT_ID(N'[dbo].[users]', 'U') IS NOT NULL "));
    assert!(sql.contains("DROP TABLE [dbo].[users]"));
    assert!(sql.ends_with(" CASCADE"));
}

#[test]
fn test_alter_adds_all_fields_in_one_statement() {
    let fields = vec![
        SinkRecordField::new("a", Schema::new(SchemaType::Int16).optional(), false),
        SinkRecordField::new("b", Schema::new(SchemaType::Float32).optional(), false),
    ];
    let sql = unquoted().build_alter_table(&users(), &fields).unwrap();
    assert_eq!(sql, ["ALTER TABLE dbo.users ADD\na smallint NULL,\nb real NULL"]);
}

// ===================================================================
// DML
// ===================================================================

#[test]
fn test_upsert_single_key() {
    let t = users();
    let sql = dialect()
        .build_upsert(&t, &columns(&t, &["id"]), &columns(&t, &["name", "age"]))
        .unwrap();
    assert_eq!(sql.matches("merge into").count(), 1);
    assert!(sql.contains("using (select ? AS [id], ? AS [name], ? AS [age]) AS incoming"));
    assert!(
        sql.contains("when matched then update set [name]=incoming.[name],[age]=incoming.[age]")
    );
    assert!(sql.contains(
        "when not matched then insert ([name], [age], [id]) values (incoming.[name],incoming.[age],incoming.[id]);"
    ));
}

#[test]
fn test_upsert_keys_only() {
    let t = users();
    let sql = dialect()
        .build_upsert(&t, &columns(&t, &["id"]), &[])
        .unwrap();
    assert!(!sql.contains("when matched"));
    assert!(sql.contains("when not matched"));
}

#[test]
fn test_upsert_without_keys() {
    let t = users();
    let err = dialect()
        .build_upsert(&t, &[], &columns(&t, &["name"]))
        .unwrap_err();
    assert!(matches!(err, DialectError::InvalidInput(_)));
}

#[test]
fn test_delete_by_composite_key() {
    let t = users();
    assert_eq!(
        dialect()
            .build_delete(&t, &columns(&t, &["id", "tenant"]))
            .unwrap(),
        "DELETE FROM [dbo].[users] WHERE [id] = ? AND [tenant] = ?"
    );
}

#[test]
fn test_delete_without_keys() {
    let err = dialect().build_delete(&users(), &[]).unwrap_err();
    assert!(matches!(err, DialectError::InvalidInput(_)));
}

#[test]
fn test_insert_and_update_use_generic_forms() {
    let t = TableId::new(Some("sales"), Some("dbo"), "orders");
    let d = dialect();
    assert_eq!(
        d.build_insert(&t, &columns(&t, &["id"]), &columns(&t, &["total"]))
            .unwrap(),
        "INSERT INTO [sales].[dbo].[orders]([id],[total]) VALUES(?,?)"
    );
    assert_eq!(
        d.build_update(&t, &columns(&t, &["id"]), &columns(&t, &["total"]))
            .unwrap(),
        "UPDATE [sales].[dbo].[orders] SET [total] = ? WHERE [id] = ?"
    );
}

#[test]
fn test_bracket_in_name_is_doubled() {
    let t = TableId::unqualified("odd]name");
    assert_eq!(
        dialect().build_drop_table(&t, DropOptions::new()),
        "DROP TABLE [odd]]name]"
    );
}

// ===================================================================
// Connection URLs
// ===================================================================

#[test]
fn test_sanitized_url_masks_only_the_password() {
    let d = dialect();
    let url = "jdbc:sqlserver://db:1433;databaseName=sales;user=sa;password=hunter2";
    let once = d.sanitized_url(url);
    assert_eq!(
        once,
        "jdbc:sqlserver://db:1433;databaseName=sales;user=sa;password=****"
    );
    assert_eq!(d.sanitized_url(&once), once);
}
