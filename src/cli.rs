//! CLI интерфейс для ddlgen
//!
//! Предоставляет командную строку для компиляции схем, просмотра
//! токенов и выгрузки разобранной схемы

use crate::common::{GeneratorConfig, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ddlgen - Компилятор DSL описания схемы данных в SQL DDL
#[derive(Parser)]
#[command(name = "ddlgen")]
#[command(about = "ddlgen - A schema DSL to SQL DDL compiler in Rust")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Скомпилировать схему в CREATE TABLE утверждения
    Generate {
        /// Файл со схемой
        schema: PathBuf,

        /// Движок таблиц (клаузула ENGINE)
        #[arg(long)]
        engine: Option<String>,

        /// Кодировка таблиц (клаузула DEFAULT CHARSET)
        #[arg(long)]
        charset: Option<String>,
    },

    /// Показать последовательность токенов схемы
    Tokens {
        /// Файл со схемой
        schema: PathBuf,
    },

    /// Выгрузить разобранную схему в формате JSON
    Dump {
        /// Файл со схемой
        schema: PathBuf,
    },

    /// Показать информацию о программе
    Info,
}

impl Cli {
    /// Инициализирует CLI
    pub fn init() -> Self {
        Self::parse()
    }

    /// Загружает конфигурацию генератора
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        let config = if let Some(config_path) = &self.config {
            GeneratorConfig::from_file(config_path)?
        } else {
            GeneratorConfig::default()
        };
        Ok(config)
    }
}
