//! Генерация CREATE TABLE утверждений
//!
//! Развёртывает колонки внешних ключей в физические колонки — по одной
//! на каждую колонку первичного ключа целевой таблицы, рекурсивно —
//! и собирает полное утверждение: описания колонок, клаузулы FOREIGN KEY
//! и клаузула PRIMARY KEY внутри фиксированного шаблона.

use crate::common::constants::MAX_FK_EXPANSION_DEPTH;
use crate::common::{Error, GeneratorConfig, Result};
use crate::parser::schema::{ColType, ColumnSpec, SchemaSpec, TableSpec};

/// Физическая колонка — результат развёртывания
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalColumn {
    /// Имя физической колонки
    pub name: String,
    /// Тип, унаследованный от листовой колонки цели
    pub col_type: ColType,
    /// Длина, унаследованная от листовой колонки цели
    pub size: u32,
    /// Флаг первичного ключа исходной колонки
    pub is_pk: bool,
    /// Флаг nullable исходной колонки
    pub is_nullable: bool,
    /// Таблица, на которую ссылается колонка
    pub fk_target_table: Option<String>,
    /// Колонка цели, с которой связана эта колонка
    pub fk_target_column: Option<String>,
}

impl PhysicalColumn {
    /// Физическая колонка из обычной (не внешнего ключа)
    fn from_spec(column: &ColumnSpec) -> Self {
        Self {
            name: column.name.clone(),
            col_type: column.col_type,
            size: column.size,
            is_pk: column.is_pk,
            is_nullable: column.is_nullable,
            fk_target_table: None,
            fk_target_column: None,
        }
    }

    /// Описание колонки: `имя ТИП[(длина)] NULL|NOT NULL`
    fn render(&self) -> Result<String> {
        let size = if self.size > 0 {
            format!("({})", self.size)
        } else {
            String::new()
        };
        let nullability = if self.is_nullable { "NULL" } else { "NOT NULL" };
        Ok(format!(
            "{} {}{} {}",
            self.name,
            self.col_type.sql_name()?,
            size,
            nullability
        ))
    }
}

/// Развёртывает колонку в упорядоченный список физических колонок.
/// Обычная колонка возвращается как есть; внешний ключ даёт по одной
/// колонке `<имя>_<подколонка>` на каждую листовую колонку первичного
/// ключа цели, со связью колонка-к-колонке для клаузулы FOREIGN KEY.
pub fn sub_columns(schema: &SchemaSpec, column: &ColumnSpec) -> Result<Vec<PhysicalColumn>> {
    expand(schema, column, 0)
}

fn expand(schema: &SchemaSpec, column: &ColumnSpec, depth: usize) -> Result<Vec<PhysicalColumn>> {
    if depth > MAX_FK_EXPANSION_DEPTH {
        return Err(Error::semantic(format!(
            "Цепочка внешних ключей колонки [{}] глубже {} (возможен цикл)",
            column.name, MAX_FK_EXPANSION_DEPTH
        )));
    }
    if column.col_type != ColType::Fk {
        return Ok(vec![PhysicalColumn::from_spec(column)]);
    }
    let target_name = column.fk_target.as_deref().ok_or_else(|| {
        Error::internal(format!(
            "внешний ключ [{}] не прошёл разрешение",
            column.name
        ))
    })?;
    let target = schema.get(target_name).ok_or_else(|| {
        Error::semantic(format!(
            "Нет таблицы [{}] — цели внешнего ключа [{}]",
            target_name, column.name
        ))
    })?;
    let mut subcols = Vec::new();
    for key_name in &target.key {
        let key_column = target.columns.get(key_name).ok_or_else(|| {
            Error::internal(format!(
                "колонка первичного ключа [{}] отсутствует в таблице [{}]",
                key_name, target.name
            ))
        })?;
        for sub in expand(schema, key_column, depth + 1)? {
            subcols.push(PhysicalColumn {
                name: format!("{}_{}", column.name, sub.name),
                col_type: sub.col_type,
                size: sub.size,
                is_pk: column.is_pk,
                is_nullable: column.is_nullable,
                fk_target_table: Some(target.name.clone()),
                fk_target_column: Some(sub.name),
            });
        }
    }
    Ok(subcols)
}

/// Генератор CREATE TABLE утверждений
#[derive(Debug, Clone, Default)]
pub struct SqlGenerator {
    config: GeneratorConfig,
}

impl SqlGenerator {
    /// Создает генератор с конфигурацией по умолчанию
    pub fn new() -> Self {
        Self::default()
    }

    /// Создает генератор с заданной конфигурацией
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Собирает полное CREATE TABLE утверждение для таблицы
    pub fn create_statement(&self, schema: &SchemaSpec, table: &TableSpec) -> Result<String> {
        let mut statement = CreateStatement {
            header: format!("CREATE TABLE IF NOT EXISTS {} (\n", table.name),
            tail: format!(
                "\n) ENGINE={} DEFAULT CHARSET={};\n",
                self.config.engine, self.config.charset
            ),
            col_descs: Vec::new(),
            sub_tail: Vec::new(),
        };
        for column in table.columns.values() {
            statement.describe_column(schema, column)?;
        }
        statement.describe_pk(table);
        Ok(statement.render())
    }
}

/// Генерирует CREATE TABLE утверждение с настройками по умолчанию
pub fn generate_create_statement(schema: &SchemaSpec, table: &TableSpec) -> Result<String> {
    SqlGenerator::new().create_statement(schema, table)
}

/// Промежуточные части собираемого утверждения
struct CreateStatement {
    header: String,
    tail: String,
    col_descs: Vec<String>,
    sub_tail: Vec<String>,
}

impl CreateStatement {
    /// Добавляет описания физических колонок и клаузулу FOREIGN KEY
    /// для колонки внешнего ключа
    fn describe_column(&mut self, schema: &SchemaSpec, column: &ColumnSpec) -> Result<()> {
        let mut local_names = Vec::new();
        let mut target_names = Vec::new();
        for sub in sub_columns(schema, column)? {
            self.col_descs.push(sub.render()?);
            if let Some(target_column) = sub.fk_target_column {
                local_names.push(sub.name);
                target_names.push(target_column);
            }
        }
        if column.col_type == ColType::Fk {
            let target = column.fk_target.as_deref().ok_or_else(|| {
                Error::internal(format!(
                    "внешний ключ [{}] не прошёл разрешение",
                    column.name
                ))
            })?;
            self.sub_tail.push(format!(
                "FOREIGN KEY ({}) REFERENCES {}({})",
                local_names.join(", "),
                target,
                target_names.join(", ")
            ));
        }
        Ok(())
    }

    /// Добавляет клаузулу PRIMARY KEY с объявленными именами колонок
    /// ключа в порядке объявления
    fn describe_pk(&mut self, table: &TableSpec) {
        self.sub_tail
            .push(format!("PRIMARY KEY ({})", table.key.join(", ")));
    }

    /// Собирает утверждение целиком
    fn render(&self) -> String {
        self.header.clone()
            + &self.col_descs.join(",\n")
            + ",\n"
            + &self.sub_tail.join(",\n")
            + &self.tail
    }
}
