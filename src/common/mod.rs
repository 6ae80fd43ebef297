//! Общие типы и утилиты для ddlgen

pub mod config;
pub mod constants;
pub mod error;

#[cfg(test)]
pub mod test_utils;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
