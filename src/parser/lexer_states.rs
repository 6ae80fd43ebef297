// Состояния конечного автомата лексера

impl<R: BufRead> Lexer<R> {
    /// Начало токена: классифицирует первый символ
    fn start_token(&mut self) -> Result<Step> {
        let ch = match self.next_char()? {
            Some(ch) => ch,
            None => return Ok(Step::Done),
        };
        if ch == '{' {
            return Ok(Step::Emit(self.emit(TokenType::LeftBrace)));
        }
        if ch == '}' {
            return Ok(Step::Emit(self.emit(TokenType::RightBrace)));
        }
        if ch == '(' {
            return Ok(Step::Emit(self.emit(TokenType::LeftParen)));
        }
        if ch == ')' {
            return Ok(Step::Emit(self.emit(TokenType::RightParen)));
        }
        if ch == ';' || ch == '\n' {
            return Ok(Step::Emit(self.emit(TokenType::LineEnd)));
        }
        if ch.is_ascii_digit() {
            return Ok(Step::Transition(State::InNumber));
        }
        if is_identifier_start(ch) {
            return Ok(Step::Transition(State::InIdentifier));
        }
        if ch.is_whitespace() {
            return Ok(Step::Transition(State::InWhitespace));
        }
        Err(Error::lexical(format!(
            "символ '{}' не принадлежит ни одному классу токенов (строка {})",
            ch, self.line
        )))
    }

    /// Дочитывает число: цифры до первого другого символа
    fn finish_number(&mut self) -> Result<Step> {
        loop {
            let ch = match self.next_char()? {
                Some(ch) => ch,
                None => break,
            };
            if !ch.is_ascii_digit() {
                self.backup()?;
                break;
            }
        }
        Ok(Step::Emit(self.emit(TokenType::Number)))
    }

    /// Дочитывает идентификатор: буквы и подчёркивания
    fn finish_identifier(&mut self) -> Result<Step> {
        loop {
            let ch = match self.next_char()? {
                Some(ch) => ch,
                None => break,
            };
            if !is_identifier_char(ch) {
                self.backup()?;
                break;
            }
        }
        Ok(Step::Emit(self.emit(TokenType::Identifier)))
    }

    /// Дочитывает пробельную последовательность; перевод строки
    /// не входит в неё и возвращается в буфер
    fn finish_whitespace(&mut self) -> Result<Step> {
        loop {
            let ch = match self.next_char()? {
                Some(ch) => ch,
                None => break,
            };
            if ch == '\n' || !ch.is_whitespace() {
                self.backup()?;
                break;
            }
        }
        Ok(Step::Emit(self.emit(TokenType::Whitespace)))
    }
}
