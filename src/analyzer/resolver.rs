//! Разрешение внешних ключей
//!
//! Второй проход над готовой схемой: каждая колонка внешнего ключа
//! обязана указывать на существующую таблицу. Проход выполняется после
//! разбора всех таблиц, поэтому ссылки вперёд — на таблицы, объявленные
//! позже по тексту — разрешаются так же, как ссылки назад.
//!
//! Привязка к конкретной колонке целевой таблицы здесь не выполняется:
//! она зависит от — возможно составного — первичного ключа цели
//! и устанавливается при развёртывании в генераторе.

use crate::common::{Error, Result};
use crate::parser::schema::{ColType, SchemaSpec};

/// Проверяет, что каждый внешний ключ схемы указывает на существующую таблицу
pub fn resolve(schema: &SchemaSpec) -> Result<()> {
    for table in schema.tables() {
        for column in table.columns.values() {
            if column.col_type != ColType::Fk {
                continue;
            }
            let target = column.fk_target.as_deref().ok_or_else(|| {
                Error::semantic(format!(
                    "Внешний ключ [{}] в таблице [{}] не указывает целевую таблицу",
                    column.name, table.name
                ))
            })?;
            if schema.get(target).is_none() {
                return Err(Error::semantic(format!(
                    "Нет таблицы [{}] — цели внешнего ключа [{}] в таблице [{}]",
                    target, column.name, table.name
                )));
            }
        }
    }
    Ok(())
}
