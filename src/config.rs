//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::domain::{PhoneFormat, PhoneRules};
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default book file, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Book file path (default: "address_book.json")
    pub book_path: PathBuf,

    /// Accepted phone shapes (default: all)
    pub phone_rules: PhoneRules,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESSBOOK_PATH`: Book file path (default: "address_book.json")
    /// - `ADDRESSBOOK_PHONE_FORMATS`: Comma-separated phone shapes, any of
    ///   `digits10`, `local`, `international`, `international-compact`
    ///   (default: all of them)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let book_path = env::var("ADDRESSBOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESSBOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let phone_rules = match env::var("ADDRESSBOOK_PHONE_FORMATS") {
            Ok(val) => Self::parse_phone_formats("ADDRESSBOOK_PHONE_FORMATS", &val)?,
            Err(_) => PhoneRules::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            phone_rules,
            log_level,
        })
    }

    /// Parse a comma-separated list of phone format names.
    fn parse_phone_formats(var_name: &str, value: &str) -> ConfigResult<PhoneRules> {
        let formats = value
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.parse::<PhoneFormat>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            })?;

        PhoneRules::new(formats).ok_or_else(|| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: "At least one phone format is required".to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            phone_rules: PhoneRules::default(),
            log_level: "warn".to_string(),
        }
    }
}
