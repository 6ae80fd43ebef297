//! Обработка ошибок для ddlgen

use thiserror::Error;

/// Основной тип ошибки для ddlgen
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Лексическая ошибка (нечитаемый или неклассифицируемый символ)
    #[error("Lexical error: {message}")]
    Lexical { message: String },

    /// Синтаксическая ошибка (неожиданный токен, пустая таблица, незакрытая скобка)
    #[error("Syntax error: {message}")]
    Syntax { message: String },

    /// Семантическая ошибка (неизвестный тип, неразрешённый внешний ключ)
    #[error("Semantic error: {message}")]
    Semantic { message: String },

    /// Повторное определение таблицы или колонки
    #[error("Duplicate definition: {message}")]
    DuplicateDefinition { message: String },

    /// Извлечение из пустого буфера предпросмотра
    #[error("pop from empty lookahead buffer")]
    EmptyBuffer,

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для ddlgen
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает лексическую ошибку
    pub fn lexical(message: impl Into<String>) -> Self {
        Self::Lexical {
            message: message.into(),
        }
    }

    /// Создает синтаксическую ошибку
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Создает семантическую ошибку
    pub fn semantic(message: impl Into<String>) -> Self {
        Self::Semantic {
            message: message.into(),
        }
    }

    /// Создает ошибку повторного определения
    pub fn duplicate_definition(message: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
