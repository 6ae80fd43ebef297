//! Тесты семантического анализа схемы

pub mod resolver_tests;
