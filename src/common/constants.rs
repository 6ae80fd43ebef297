//! Константы для ddlgen

/// Начальная ёмкость буфера предпросмотра лексера (в символах)
pub const DEFAULT_LOOKAHEAD_CAPACITY: usize = 1024;

/// Максимальная глубина развёртывания цепочек внешних ключей
pub const MAX_FK_EXPANSION_DEPTH: usize = 64;

/// Движок таблиц по умолчанию в генерируемых CREATE TABLE
pub const DEFAULT_ENGINE: &str = "InnoDB";

/// Кодировка по умолчанию в генерируемых CREATE TABLE
pub const DEFAULT_CHARSET: &str = "utf8";
