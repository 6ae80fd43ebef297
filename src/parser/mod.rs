//! Разбор DSL описания схемы данных

pub mod deque;
pub mod lexer;
pub mod parser;
pub mod schema;
pub mod stream;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use deque::CharDeque;
pub use lexer::Lexer;
pub use parser::{filtered, parse_schema, Filtered, SchemaParser};
pub use schema::{ColType, ColumnSpec, SchemaSpec, TableSpec, COLUMN_TYPES};
pub use stream::TokenStream;
pub use token::{Token, TokenType};
