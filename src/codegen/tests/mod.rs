//! Тесты генерации SQL DDL
