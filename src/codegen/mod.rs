//! Генерация SQL DDL из разрешённой схемы

pub mod generator;

#[cfg(test)]
pub mod tests;

pub use generator::{generate_create_statement, sub_columns, PhysicalColumn, SqlGenerator};
