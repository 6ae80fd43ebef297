//! Токены DSL описания схемы данных
//!
//! Определяет типы токенов, которые распознаёт лексический анализатор:
//! скобки, идентификаторы, числа, пробелы и концы строк.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Токен с текстом и позицией в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    /// Номер строки (с единицы)
    pub line: usize,
    /// Номер колонки; всегда `None`
    // TODO: отслеживать номер колонки так же, как номер строки
    pub column: Option<usize>,
}

impl Token {
    pub fn new(token_type: TokenType, value: String, line: usize) -> Self {
        Self {
            token_type,
            value,
            line,
            column: None,
        }
    }

    /// Числовое значение токена NUMBER
    pub fn number(&self) -> crate::common::Result<u32> {
        self.value.parse().map_err(|_| {
            crate::common::Error::syntax(format!(
                "Неверное число \"{}\" на строке {}",
                self.value, self.line
            ))
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[\"{}\"] at line {}", self.token_type, self.value, self.line)
    }
}

/// Типы токенов DSL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    /// Открывающая круглая скобка
    LeftParen,
    /// Закрывающая круглая скобка
    RightParen,
    /// Открывающая фигурная скобка
    LeftBrace,
    /// Закрывающая фигурная скобка
    RightBrace,
    /// Идентификатор (имя таблицы, колонки, типа или модификатора)
    Identifier,
    /// Пробельные символы (кроме перевода строки)
    Whitespace,
    /// Конец утверждения: точка с запятой или перевод строки
    LineEnd,
    /// Целое число без знака
    Number,
}

impl TokenType {
    /// Проверяет, следует ли пропустить токен перед парсингом
    pub fn should_skip(&self) -> bool {
        matches!(self, TokenType::Whitespace)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::LeftParen => "LPAREN",
            TokenType::RightParen => "RPAREN",
            TokenType::LeftBrace => "LBRACE",
            TokenType::RightBrace => "RBRACE",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::LineEnd => "LINE_END",
            TokenType::Number => "NUMBER",
        };
        write!(f, "{}", name)
    }
}

/// Может ли символ начинать идентификатор
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Может ли символ продолжать идентификатор
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
