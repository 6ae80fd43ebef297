//! Тесты разрешения внешних ключей

use crate::analyzer::resolve;
use crate::common::Error;
use crate::parser::{ColType, ColumnSpec, SchemaSpec, TableSpec};

/// Таблица с единственной колонкой целочисленного первичного ключа
fn keyed_table(name: &str) -> TableSpec {
    let mut table = TableSpec::new(name);
    let mut id = ColumnSpec::new("id", ColType::Integer);
    id.is_pk = true;
    table.key.push("id".to_string());
    table.columns.insert("id".to_string(), id);
    table
}

/// Колонка внешнего ключа на заданную таблицу
fn fk_column(name: &str, target: &str) -> ColumnSpec {
    let mut column = ColumnSpec::new(name, ColType::Fk);
    column.fk_target = Some(target.to_string());
    column
}

#[test]
fn test_resolve_empty_schema() {
    assert!(resolve(&SchemaSpec::new()).is_ok());
}

#[test]
fn test_resolve_schema_without_fk() {
    let mut schema = SchemaSpec::new();
    schema.insert(keyed_table("customers"));
    assert!(resolve(&schema).is_ok());
}

#[test]
fn test_resolve_existing_target() {
    let mut schema = SchemaSpec::new();
    schema.insert(keyed_table("customers"));

    let mut invoices = keyed_table("invoices");
    let customer = fk_column("customer", "customers");
    invoices.columns.insert("customer".to_string(), customer);
    schema.insert(invoices);

    assert!(resolve(&schema).is_ok());
}

#[test]
fn test_resolve_forward_reference() {
    // цель объявлена после ссылающейся таблицы
    let mut schema = SchemaSpec::new();

    let mut invoices = keyed_table("invoices");
    invoices
        .columns
        .insert("customer".to_string(), fk_column("customer", "customers"));
    schema.insert(invoices);
    schema.insert(keyed_table("customers"));

    assert!(resolve(&schema).is_ok());
}

#[test]
fn test_resolve_missing_target() {
    let mut schema = SchemaSpec::new();
    let mut invoices = keyed_table("invoices");
    invoices
        .columns
        .insert("customer".to_string(), fk_column("customer", "ghosts"));
    schema.insert(invoices);

    let err = resolve(&schema).unwrap_err();
    match err {
        Error::Semantic { message } => {
            // ошибка называет отсутствующую таблицу, колонку и владельца
            assert!(message.contains("[ghosts]"));
            assert!(message.contains("[customer]"));
            assert!(message.contains("[invoices]"));
        }
        other => panic!("ожидалась семантическая ошибка, получено {:?}", other),
    }
}

#[test]
fn test_resolve_fk_without_target_name() {
    let mut schema = SchemaSpec::new();
    let mut table = keyed_table("t");
    table
        .columns
        .insert("other".to_string(), ColumnSpec::new("other", ColType::Fk));
    schema.insert(table);

    let err = resolve(&schema).unwrap_err();
    assert!(matches!(err, Error::Semantic { .. }));
}

#[test]
fn test_resolve_self_reference() {
    let mut schema = SchemaSpec::new();
    let mut table = keyed_table("employees");
    table
        .columns
        .insert("manager".to_string(), fk_column("manager", "employees"));
    schema.insert(table);

    assert!(resolve(&schema).is_ok());
}
