//! Синтаксический анализатор DSL описания схемы данных
//!
//! Потребляет последовательность токенов, проверяет грамматику таблиц
//! и колонок и строит схему. После разбора всех таблиц запускается
//! проход резолвера, связывающий внешние ключи; схема возвращается
//! только целиком и только при успехе обоих проходов.

use crate::analyzer::resolve;
use crate::common::{Error, Result};
use crate::parser::lexer::Lexer;
use crate::parser::schema::{ColType, ColumnSpec, SchemaSpec, TableSpec, COLUMN_TYPES};
use crate::parser::token::{Token, TokenType};

/// Последовательность токенов без пробельных
pub struct Filtered<I> {
    inner: I,
}

/// Оборачивает последовательность токенов, отбрасывая пробельные
pub fn filtered<I: Iterator<Item = Result<Token>>>(tokens: I) -> Filtered<I> {
    Filtered { inner: tokens }
}

impl<I: Iterator<Item = Result<Token>>> Iterator for Filtered<I> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next() {
                Some(Ok(token)) if token.token_type.should_skip() => continue,
                other => return other,
            }
        }
    }
}

/// Синтаксический анализатор схемы
pub struct SchemaParser<I: Iterator<Item = Result<Token>>> {
    tokens: Filtered<I>,
    tables: SchemaSpec,
}

impl<I: Iterator<Item = Result<Token>>> SchemaParser<I> {
    /// Создает парсер над последовательностью токенов
    pub fn new(tokens: I) -> Self {
        Self {
            tokens: filtered(tokens),
            tables: SchemaSpec::new(),
        }
    }

    /// Разбирает все таблицы и разрешает внешние ключи
    pub fn parse(mut self) -> Result<SchemaSpec> {
        loop {
            let id = match self.get(TokenType::Identifier, &[TokenType::LineEnd])? {
                Some(id) => id,
                None => break,
            };
            let brace = self.tokens.next().transpose()?.ok_or_else(|| {
                Error::syntax(format!(
                    "Неожиданный конец ввода после имени таблицы \"{}\"",
                    id.value
                ))
            })?;
            if brace.token_type != TokenType::LeftBrace {
                return Err(Error::syntax(format!(
                    "Ожидалась фигурная скобка после имени таблицы на строке {}",
                    brace.line
                )));
            }
            if self.tables.contains(&id.value) {
                return Err(Error::duplicate_definition(format!(
                    "Таблица [{}] уже определена (строка {})",
                    id.value, id.line
                )));
            }
            let mut table = TableSpec::new(&id.value);
            self.finish_table(&mut table)?;
            self.tables.insert(table);
        }
        resolve(&self.tables)?;
        log::debug!("разобрано таблиц: {}", self.tables.len());
        Ok(self.tables)
    }

    /// Возвращает первый токен нужного типа, пропуская отбрасываемые.
    /// `None` по окончании входа; любой другой токен — ошибка.
    fn get(&mut self, wanted: TokenType, discard: &[TokenType]) -> Result<Option<Token>> {
        while let Some(token) = self.tokens.next() {
            let token = token?;
            if token.token_type == wanted {
                return Ok(Some(token));
            }
            if !discard.contains(&token.token_type) {
                return Err(Error::syntax(format!(
                    "Неожиданный токен (\"{}\") на строке {}. Ожидался {}",
                    token.value, token.line, wanted
                )));
            }
        }
        Ok(None)
    }

    /// Собирает токены до первого из терминаторов; терминатор возвращается
    fn collect_up_to(
        &mut self,
        terminators: &[TokenType],
        table_name: &str,
    ) -> Result<(Vec<Token>, Token)> {
        let mut collected = Vec::new();
        while let Some(token) = self.tokens.next() {
            let token = token?;
            if terminators.contains(&token.token_type) {
                return Ok((collected, token));
            }
            collected.push(token);
        }
        Err(Error::syntax(format!(
            "Неожиданный конец ввода: таблица [{}] не закрыта",
            table_name
        )))
    }

    /// Собирает колонки таблицы до закрывающей фигурной скобки
    fn finish_table(&mut self, table: &mut TableSpec) -> Result<()> {
        let mut nb_cols = 0;
        loop {
            let (tokens, terminator) =
                self.collect_up_to(&[TokenType::LineEnd, TokenType::RightBrace], &table.name)?;
            let done = terminator.token_type == TokenType::RightBrace;
            if let Some(column) = make_column(&tokens)? {
                if table.columns.contains_key(&column.name) {
                    return Err(Error::duplicate_definition(format!(
                        "Колонка [{}] в таблице [{}] уже определена (строка {})",
                        column.name, table.name, tokens[0].line
                    )));
                }
                nb_cols += 1;
                if column.is_pk {
                    table.key.push(column.name.clone());
                }
                table.columns.insert(column.name.clone(), column);
            }
            if done {
                if nb_cols == 0 {
                    return Err(Error::syntax(format!(
                        "Таблица [{}] не содержит колонок (строка {})",
                        table.name, terminator.line
                    )));
                }
                return Ok(());
            }
        }
    }
}

/// Ошибка неверного описания колонки
fn invalid_column(token: &Token) -> Error {
    Error::syntax(format!(
        "Неверное описание колонки на строке {}",
        token.line
    ))
}

/// Строит колонку из токенов одного утверждения.
/// Пустое утверждение (пустая строка) колонки не даёт.
fn make_column(tokens: &[Token]) -> Result<Option<ColumnSpec>> {
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() < 2
        || tokens[0].token_type != TokenType::Identifier
        || tokens[1].token_type != TokenType::Identifier
    {
        return Err(invalid_column(&tokens[0]));
    }
    let col_type = column_type(&tokens[1])?;
    let mut column = ColumnSpec::new(&tokens[0].value, col_type);
    let rest = &tokens[2..];
    if !rest.is_empty() {
        set_subtype_and_modifiers(&mut column, rest)?;
    }
    Ok(Some(column))
}

/// Тип колонки по ключевому слову
fn column_type(token: &Token) -> Result<ColType> {
    COLUMN_TYPES
        .get(token.value.as_str())
        .copied()
        .ok_or_else(|| {
            Error::semantic(format!(
                "Неизвестный тип колонки \"{}\" на строке {}",
                token.value, token.line
            ))
        })
}

/// Разбирает скобочное уточнение типа и модификатор колонки
fn set_subtype_and_modifiers(column: &mut ColumnSpec, tokens: &[Token]) -> Result<()> {
    let rest = if tokens.len() > 2 && tokens[0].token_type == TokenType::LeftParen {
        if tokens[2].token_type != TokenType::RightParen {
            return Err(invalid_column(&tokens[2]));
        }
        set_subtype(column, &tokens[1])?;
        &tokens[3..]
    } else {
        tokens
    };
    set_modifiers(column, rest)
}

/// Значение в скобках: имя целевой таблицы для внешнего ключа,
/// числовая длина для остальных типов
fn set_subtype(column: &mut ColumnSpec, token: &Token) -> Result<()> {
    match (column.col_type, token.token_type) {
        (ColType::Fk, TokenType::Identifier) => {
            column.fk_target = Some(token.value.clone());
            Ok(())
        }
        (ColType::Fk, _) => Err(Error::syntax(format!(
            "Цель внешнего ключа должна быть именем таблицы (строка {})",
            token.line
        ))),
        (_, TokenType::Number) => {
            column.size = token.number()?;
            Ok(())
        }
        _ => Err(invalid_column(token)),
    }
}

/// Разбирает завершающий модификатор `null` или `pk`
fn set_modifiers(column: &mut ColumnSpec, tokens: &[Token]) -> Result<()> {
    if tokens.is_empty() {
        return Ok(());
    }
    if tokens.len() > 1 || tokens[0].token_type != TokenType::Identifier {
        return Err(invalid_column(&tokens[0]));
    }
    match tokens[0].value.as_str() {
        "null" => column.is_nullable = true,
        "pk" => column.is_pk = true,
        other => {
            return Err(Error::syntax(format!(
                "Неизвестный модификатор \"{}\" на строке {}",
                other, tokens[0].line
            )))
        }
    }
    Ok(())
}

/// Разбирает схему из текста
pub fn parse_schema(input: &str) -> Result<SchemaSpec> {
    SchemaParser::new(Lexer::new(input.as_bytes())).parse()
}
