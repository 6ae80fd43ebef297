//! Модель схемы данных
//!
//! Схема — это реестр таблиц, адресуемых по имени. Колонка внешнего ключа
//! хранит имя целевой таблицы, а не ссылку на неё: реестр остаётся
//! единственным владельцем всех таблиц, и циклы ссылок между таблицами
//! не возникают.

use crate::common::{Error, Result};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// Ключевые слова типов колонок DSL
    pub static ref COLUMN_TYPES: HashMap<&'static str, ColType> = {
        let mut map = HashMap::new();
        map.insert("int", ColType::Integer);
        map.insert("string", ColType::String);
        map.insert("fk", ColType::Fk);
        map.insert("timestamp", ColType::Timestamp);
        map.insert("date", ColType::Date);
        map.insert("binary", ColType::Binary);
        map.insert("bool", ColType::Boolean);
        map
    };
}

/// Тип колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColType {
    Integer,
    String,
    Fk,
    Timestamp,
    Date,
    Binary,
    Boolean,
}

impl ColType {
    /// Имя SQL типа для физической колонки.
    /// Внешний ключ физического типа не имеет: перед генерацией он
    /// обязан быть развёрнут в колонки целевой таблицы.
    pub fn sql_name(&self) -> Result<&'static str> {
        match self {
            ColType::Integer => Ok("INT"),
            ColType::String => Ok("VARCHAR"),
            ColType::Timestamp => Ok("TIMESTAMP"),
            ColType::Date => Ok("DATE"),
            ColType::Binary => Ok("BINARY"),
            ColType::Boolean => Ok("BOOL"),
            ColType::Fk => Err(Error::internal(
                "внешний ключ не имеет физического SQL типа",
            )),
        }
    }
}

/// Описание колонки таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Имя колонки
    pub name: String,
    /// Входит ли колонка в первичный ключ
    pub is_pk: bool,
    /// Допускает ли колонка NULL
    pub is_nullable: bool,
    /// Тип колонки
    pub col_type: ColType,
    /// Явная длина; 0 означает отсутствие длины
    pub size: u32,
    /// Имя целевой таблицы внешнего ключа; проверяется резолвером
    pub fk_target: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, col_type: ColType) -> Self {
        Self {
            name: name.into(),
            is_pk: false,
            is_nullable: false,
            col_type,
            size: 0,
            fk_target: None,
        }
    }
}

/// Описание таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Имя таблицы
    pub name: String,
    /// Имена колонок первичного ключа в порядке объявления
    pub key: Vec<String>,
    /// Колонки таблицы в порядке объявления
    pub columns: IndexMap<String, ColumnSpec>,
}

impl TableSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: Vec::new(),
            columns: IndexMap::new(),
        }
    }
}

/// Схема: реестр таблиц, адресуемых по имени
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSpec {
    tables: IndexMap<String, TableSpec>,
}

impl SchemaSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Есть ли таблица с данным именем
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Таблица по имени
    pub fn get(&self, name: &str) -> Option<&TableSpec> {
        self.tables.get(name)
    }

    /// Регистрирует таблицу
    pub fn insert(&mut self, table: TableSpec) {
        self.tables.insert(table.name.clone(), table);
    }

    /// Таблицы в порядке объявления
    pub fn tables(&self) -> impl Iterator<Item = &TableSpec> {
        self.tables.values()
    }

    /// Количество таблиц
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Пуста ли схема
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
