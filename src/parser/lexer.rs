//! Лексический анализатор DSL описания схемы данных
//!
//! Лениво читает символы из входного потока и классифицирует их в токены
//! конечным автоматом. Буфер предпросмотра позволяет вернуть последний
//! прочитанный символ без повторного чтения источника.

use crate::common::{Error, Result};
use crate::parser::deque::CharDeque;
use crate::parser::token::{is_identifier_char, is_identifier_start, Token, TokenType};
use std::io::BufRead;

/// Состояния конечного автомата лексера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Начало нового токена
    StartToken,
    /// Внутри числа
    InNumber,
    /// Внутри идентификатора
    InIdentifier,
    /// Внутри пробельной последовательности
    InWhitespace,
}

/// Результат шага конечного автомата
enum Step {
    /// Токен готов
    Emit(Token),
    /// Переход в другое состояние
    Transition(State),
    /// Вход исчерпан
    Done,
}

/// Лексический анализатор DSL
pub struct Lexer<R: BufRead> {
    /// Источник символов
    input: R,
    /// Источник исчерпан
    eof: bool,
    /// Буфер предпросмотра и возврата символов
    buf: CharDeque,
    /// Символы, составляющие текст текущего токена
    consumed: Vec<char>,
    /// Текущее состояние автомата
    state: State,
    /// Лексическая ошибка уже выдана; последовательность завершена
    failed: bool,
    /// Номер текущей строки (с единицы)
    line: usize,
}

impl<R: BufRead> Lexer<R> {
    /// Создает новый лексический анализатор над потоком
    pub fn new(input: R) -> Self {
        Self {
            input,
            eof: false,
            buf: CharDeque::new(),
            consumed: Vec::new(),
            state: State::StartToken,
            failed: false,
            line: 1,
        }
    }

    /// Возвращает следующий токен; `None` по окончании входа.
    /// Ошибка терминальна: после неё последовательность завершена.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.failed {
            return Ok(None);
        }
        loop {
            let step = match self.state {
                State::StartToken => self.start_token(),
                State::InNumber => self.finish_number(),
                State::InIdentifier => self.finish_identifier(),
                State::InWhitespace => self.finish_whitespace(),
            };
            let step = match step {
                Ok(step) => step,
                Err(err) => {
                    self.failed = true;
                    return Err(err);
                }
            };
            match step {
                Step::Emit(token) => {
                    self.state = State::StartToken;
                    return Ok(Some(token));
                }
                Step::Transition(next) => self.state = next,
                Step::Done => return Ok(None),
            }
        }
    }

    /// Возвращает все токены из входного потока, включая пробельные
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    // === Вспомогательные методы ===

    /// Дочитывает буфер предпросмотра до конца строки или конца входа.
    /// Вызывается только при пустом буфере.
    fn fill_buf(&mut self) -> Result<()> {
        let mut chunk = String::new();
        let nb = self.input.read_line(&mut chunk).map_err(|err| {
            if err.kind() == std::io::ErrorKind::InvalidData {
                Error::lexical(format!(
                    "невозможно прочитать символ на строке {}",
                    self.line
                ))
            } else {
                Error::Io(err)
            }
        })?;
        if nb == 0 {
            self.eof = true;
            return Ok(());
        }
        for ch in chunk.chars() {
            self.buf.push_back(ch);
        }
        Ok(())
    }

    /// Исчерпаны ли и буфер, и источник
    fn is_done(&self) -> bool {
        self.buf.is_empty() && self.eof
    }

    /// Потребляет следующий символ; `None` по окончании входа
    fn next_char(&mut self) -> Result<Option<char>> {
        if self.buf.is_empty() {
            self.fill_buf()?;
        }
        if self.is_done() {
            return Ok(None);
        }
        let ch = self.buf.pop_front()?;
        self.consumed.push(ch);
        if ch == '\n' {
            self.line += 1;
        }
        Ok(Some(ch))
    }

    /// Возвращает последний потреблённый символ в буфер предпросмотра.
    /// Симметрично потреблению: возврат перевода строки откатывает
    /// счётчик строк.
    fn backup(&mut self) -> Result<()> {
        let ch = self
            .consumed
            .pop()
            .ok_or_else(|| Error::internal("нет потреблённого символа для возврата"))?;
        self.buf.push_front(ch);
        if ch == '\n' {
            self.line -= 1;
        }
        Ok(())
    }

    /// Текст токена, накопленный с последнего emit
    fn text(&self) -> String {
        self.consumed.iter().collect()
    }

    /// Сбрасывает накопленный текст токена
    fn forget(&mut self) {
        self.consumed.clear();
    }

    /// Формирует токен из накопленного текста
    fn emit(&mut self, token_type: TokenType) -> Token {
        let token = Token::new(token_type, self.text(), self.line);
        self.forget();
        token
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

// Подключаем состояния автомата из отдельного файла
include!("lexer_states.rs");
