//! Address Book - a personal contact manager persisted to a JSON file.
//!
//! This library keeps contact records (name, address, phones, emails,
//! birthday) with field-level validation, case-insensitive search, and
//! birthday-proximity queries.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects and the phone rule set
//! - **models**: The contact `Record` and its mutators
//! - **book**: The `AddressBook` collection and its queries
//! - **search**: Substring search across names, phones, and emails
//! - **storage**: JSON codec, atomic file I/O, and the `BookStore` trait
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: One-shot command-line commands

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod search;
pub mod storage;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{
    validate_birthday, validate_email, validate_phone, Address, Birthday, Email, FieldKind, Name,
    Phone, PhoneFormat, PhoneRules, ValidationError,
};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use search::{FieldMatch, MatchField, RecordMatch};
pub use storage::{BookStore, JsonFileStore};
