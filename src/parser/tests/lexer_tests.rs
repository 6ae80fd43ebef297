//! Тесты лексического анализатора DSL

use crate::common::{Error, Result};
use crate::parser::{Lexer, TokenType};

/// Лексер над строковым входом
fn lexer_for(input: &'static str) -> Lexer<&'static [u8]> {
    Lexer::new(input.as_bytes())
}

#[test]
fn test_number_then_identifier() -> Result<()> {
    let mut lexer = lexer_for("123abc");

    let number = lexer.next_token()?.unwrap();
    assert_eq!(number.token_type, TokenType::Number);
    assert_eq!(number.value, "123");

    let ident = lexer.next_token()?.unwrap();
    assert_eq!(ident.token_type, TokenType::Identifier);
    assert_eq!(ident.value, "abc");

    assert!(lexer.next_token()?.is_none());
    Ok(())
}

#[test]
fn test_identifier_then_line_end() -> Result<()> {
    let mut lexer = lexer_for("a\n");

    let ident = lexer.next_token()?.unwrap();
    assert_eq!(ident.token_type, TokenType::Identifier);
    assert_eq!(ident.value, "a");
    // перевод строки возвращён в буфер, счётчик строк откатился
    assert_eq!(ident.line, 1);

    let endl = lexer.next_token()?.unwrap();
    assert_eq!(endl.token_type, TokenType::LineEnd);
    // счётчик увеличивается после потребления перевода строки
    assert_eq!(endl.line, 2);

    assert!(lexer.next_token()?.is_none());
    Ok(())
}

#[test]
fn test_braces_parens_and_semicolon() -> Result<()> {
    let mut lexer = lexer_for("{}();");
    let expected = [
        TokenType::LeftBrace,
        TokenType::RightBrace,
        TokenType::LeftParen,
        TokenType::RightParen,
        TokenType::LineEnd,
    ];
    for wanted in expected {
        assert_eq!(lexer.next_token()?.unwrap().token_type, wanted);
    }
    assert!(lexer.next_token()?.is_none());
    Ok(())
}

#[test]
fn test_sized_type_clause() -> Result<()> {
    let mut lexer = lexer_for("string(42)");
    let tokens = lexer.tokenize()?;

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].token_type, TokenType::Identifier);
    assert_eq!(tokens[0].value, "string");
    assert_eq!(tokens[1].token_type, TokenType::LeftParen);
    assert_eq!(tokens[2].token_type, TokenType::Number);
    assert_eq!(tokens[2].value, "42");
    assert_eq!(tokens[3].token_type, TokenType::RightParen);
    Ok(())
}

#[test]
fn test_whitespace_tokens_kept() -> Result<()> {
    let mut lexer = lexer_for("id  int");
    let tokens = lexer.tokenize()?;

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value, "id");
    assert_eq!(tokens[1].token_type, TokenType::Whitespace);
    assert_eq!(tokens[1].value, "  ");
    assert_eq!(tokens[2].value, "int");
    Ok(())
}

#[test]
fn test_underscore_identifiers() -> Result<()> {
    let mut lexer = lexer_for("_private foo_bar");
    let tokens = lexer.tokenize()?;

    assert_eq!(tokens[0].token_type, TokenType::Identifier);
    assert_eq!(tokens[0].value, "_private");
    assert_eq!(tokens[2].token_type, TokenType::Identifier);
    assert_eq!(tokens[2].value, "foo_bar");
    Ok(())
}

#[test]
fn test_identifier_stops_at_digit() -> Result<()> {
    // цифры не продолжают идентификатор
    let mut lexer = lexer_for("table123");
    let tokens = lexer.tokenize()?;

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].token_type, TokenType::Identifier);
    assert_eq!(tokens[0].value, "table");
    assert_eq!(tokens[1].token_type, TokenType::Number);
    assert_eq!(tokens[1].value, "123");
    Ok(())
}

#[test]
fn test_line_counting() -> Result<()> {
    let mut lexer = lexer_for("a\nbb\nccc");
    let tokens = lexer.tokenize()?;

    let lines: Vec<(TokenType, usize)> = tokens
        .iter()
        .map(|tok| (tok.token_type, tok.line))
        .collect();
    assert_eq!(
        lines,
        vec![
            (TokenType::Identifier, 1),
            (TokenType::LineEnd, 2),
            (TokenType::Identifier, 2),
            (TokenType::LineEnd, 3),
            (TokenType::Identifier, 3),
        ]
    );
    Ok(())
}

#[test]
fn test_column_not_tracked() -> Result<()> {
    let mut lexer = lexer_for("abc");
    let token = lexer.next_token()?.unwrap();
    assert_eq!(token.column, None);
    Ok(())
}

#[test]
fn test_unclassifiable_character() {
    let mut lexer = lexer_for("id @ int");
    // первый токен читается нормально
    assert_eq!(lexer.next_token().unwrap().unwrap().value, "id");
    lexer.next_token().unwrap(); // пробел

    let err = lexer.next_token().unwrap_err();
    match err {
        Error::Lexical { message } => {
            assert!(message.contains('@'));
            assert!(message.contains('1'));
        }
        other => panic!("ожидалась лексическая ошибка, получено {:?}", other),
    }

    // ошибка терминальна: дальше токенов нет
    assert!(lexer.next_token().unwrap().is_none());
}

#[test]
fn test_empty_input() -> Result<()> {
    let mut lexer = lexer_for("");
    assert!(lexer.next_token()?.is_none());
    // повторный запрос также возвращает конец входа
    assert!(lexer.next_token()?.is_none());
    Ok(())
}

#[test]
fn test_lexer_as_iterator() {
    let tokens: Vec<_> = lexer_for("a b").map(|tok| tok.unwrap().value).collect();
    assert_eq!(tokens, vec!["a", " ", "b"]);
}
