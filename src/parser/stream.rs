//! Конкурентный производитель токенов
//!
//! Запускает лексер в отдельном потоке, передающем токены через канал
//! нулевой ёмкости: каждая отправка блокируется до приёма, так что
//! в пути находится не более одного токена. Если потребитель прекращает
//! чтение раньше конца входа, канал отсоединяется, заблокированная
//! отправка завершается ошибкой и поток производителя выходит.

use crate::common::Result;
use crate::parser::lexer::Lexer;
use crate::parser::token::Token;
use crossbeam::channel::{bounded, Receiver};
use std::io::BufRead;
use std::thread::JoinHandle;

/// Последовательность токенов, производимая рабочим потоком
pub struct TokenStream {
    receiver: Option<Receiver<Result<Token>>>,
    handle: Option<JoinHandle<()>>,
}

/// Запускает лексер над потоком в отдельном потоке исполнения
pub fn spawn<R: BufRead + Send + 'static>(input: R) -> TokenStream {
    let (sender, receiver) = bounded(0);
    let handle = std::thread::spawn(move || {
        let mut lexer = Lexer::new(input);
        loop {
            match lexer.next_token() {
                Ok(Some(token)) => {
                    if sender.send(Ok(token)).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    // лексическая ошибка завершает последовательность
                    let _ = sender.send(Err(err));
                    break;
                }
            }
        }
    });
    TokenStream {
        receiver: Some(receiver),
        handle: Some(handle),
    }
}

impl Iterator for TokenStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.as_ref()?.recv().ok()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        // отсоединяем канал, чтобы разблокировать производителя
        self.receiver.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
