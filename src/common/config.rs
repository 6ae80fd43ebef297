//! Конфигурация для ddlgen
//!
//! Предоставляет настройки генератора SQL утверждений

use crate::common::constants::{DEFAULT_CHARSET, DEFAULT_ENGINE};
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Конфигурация генератора CREATE TABLE утверждений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Движок таблиц (значение клаузулы ENGINE)
    pub engine: String,
    /// Кодировка таблиц (значение клаузулы DEFAULT CHARSET)
    pub charset: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&content)
            .map_err(|err| Error::configuration(format!("неверный TOML: {}", err)))?;
        config.validate()?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|err| Error::configuration(format!("невозможно сериализовать: {}", err)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = GeneratorConfig::default();

        if let Ok(engine) = std::env::var("DDLGEN_ENGINE") {
            config.engine = engine;
        }

        if let Ok(charset) = std::env::var("DDLGEN_CHARSET") {
            config.charset = charset;
        }

        config.validate()?;
        Ok(config)
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.engine.is_empty() {
            return Err(Error::configuration("движок таблиц не может быть пустым"));
        }

        if self.charset.is_empty() {
            return Err(Error::configuration("кодировка не может быть пустой"));
        }

        Ok(())
    }
}
