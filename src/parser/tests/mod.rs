//! Тесты для разбора DSL схемы данных

pub mod lexer_tests;
