//! Кольцевой буфер символов для предпросмотра
//!
//! Двусторонняя очередь с амортизированным O(1) добавлением и извлечением
//! с обоих концов. Служит лексеру хранилищем предпросмотра: прочитанные
//! вперёд символы лежат в начале, возврат символа кладёт его обратно
//! в начало без повторного чтения источника.

use crate::common::constants::DEFAULT_LOOKAHEAD_CAPACITY;
use crate::common::{Error, Result};

/// Двусторонняя очередь символов на кольцевом буфере
#[derive(Debug, Clone)]
pub struct CharDeque {
    /// Хранилище; логическое содержимое начинается с `left`
    buf: Vec<char>,
    /// Индекс первого занятого элемента
    left: usize,
    /// Индекс первого свободного элемента за последним занятым
    next: usize,
    /// Количество занятых элементов
    cnt: usize,
}

impl CharDeque {
    /// Создает очередь с ёмкостью по умолчанию
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOOKAHEAD_CAPACITY)
    }

    /// Создает очередь с заданной начальной ёмкостью
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec!['\0'; capacity.max(1)],
            left: 0,
            next: 0,
            cnt: 0,
        }
    }

    /// Текущая ёмкость хранилища
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Количество элементов в очереди
    pub fn len(&self) -> usize {
        self.cnt
    }

    /// Пуста ли очередь
    pub fn is_empty(&self) -> bool {
        self.cnt == 0
    }

    /// Следующая позиция по модулю ёмкости
    fn inc(&self, n: usize) -> usize {
        (n + 1) % self.capacity()
    }

    /// Предыдущая позиция по модулю ёмкости.
    /// Модуль обязан быть флоорным: усечённый даёт отрицательный
    /// индекс при отступе с позиции 0.
    fn dec(&self, n: usize) -> usize {
        (n as isize - 1).rem_euclid(self.capacity() as isize) as usize
    }

    /// Удваивает ёмкость, сохраняя логический порядок элементов
    /// и перенося их в начало нового хранилища
    fn expand(&mut self) {
        let old_cap = self.capacity();
        let mut new_buf = vec!['\0'; 2 * old_cap];
        let left = self.left;
        new_buf[..old_cap - left].copy_from_slice(&self.buf[left..]);
        if left > 0 {
            new_buf[old_cap - left..old_cap].copy_from_slice(&self.buf[..left]);
        }
        self.left = 0;
        self.next = old_cap;
        self.buf = new_buf;
    }

    /// Добавляет символ в конец
    pub fn push_back(&mut self, ch: char) {
        if self.cnt == self.capacity() {
            self.expand();
        }
        if self.cnt == 0 {
            self.buf[0] = ch;
            self.left = 0;
            self.next = 1;
        } else {
            let next = self.next;
            self.buf[next] = ch;
            self.next = self.inc(next);
        }
        self.cnt += 1;
    }

    /// Извлекает символ с конца
    pub fn pop_back(&mut self) -> Result<char> {
        if self.cnt == 0 {
            return Err(Error::EmptyBuffer);
        }
        let idx = self.dec(self.next);
        let ch = self.buf[idx];
        self.next = idx;
        self.cnt -= 1;
        Ok(ch)
    }

    /// Добавляет символ в начало
    pub fn push_front(&mut self, ch: char) {
        if self.cnt == self.capacity() {
            self.expand();
        }
        if self.cnt == 0 {
            self.buf[0] = ch;
            self.left = 0;
            self.next = 1;
        } else {
            let idx = self.dec(self.left);
            self.buf[idx] = ch;
            self.left = idx;
        }
        self.cnt += 1;
    }

    /// Извлекает символ с начала
    pub fn pop_front(&mut self) -> Result<char> {
        if self.cnt == 0 {
            return Err(Error::EmptyBuffer);
        }
        let ch = self.buf[self.left];
        self.left = self.inc(self.left);
        self.cnt -= 1;
        Ok(ch)
    }
}

impl Default for CharDeque {
    fn default() -> Self {
        Self::new()
    }
}
