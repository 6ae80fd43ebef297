//! ddlgen - Компилятор DSL описания схемы данных в SQL DDL
//!
//! Этот модуль предоставляет полный конвейер компиляции: лексический
//! анализ текста схемы, синтаксический разбор таблиц и колонок,
//! разрешение внешних ключей и генерацию CREATE TABLE утверждений
//! с развёртыванием составных внешних ключей.

pub mod analyzer;
pub mod cli;
pub mod codegen;
pub mod common;
pub mod parser;

pub use common::error::{Error, Result};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Компилирует текст схемы в CREATE TABLE утверждения,
/// по одному на таблицу в порядке объявления
pub fn compile(input: &str) -> Result<Vec<String>> {
    let schema = parser::parse_schema(input)?;
    let generator = codegen::SqlGenerator::new();
    schema
        .tables()
        .map(|table| generator.create_statement(&schema, table))
        .collect()
}
