use super::file::{load_book, save_book};
use crate::book::AddressBook;
use crate::domain::PhoneRules;
use crate::error::BookResult;
use std::path::{Path, PathBuf};

/// Storage for a single address book.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookStore {
    /// Load the stored book. A store with nothing saved yet yields an empty book.
    fn load(&self) -> BookResult<AddressBook>;

    /// Persist the whole book, replacing what was stored.
    fn save(&self, book: &AddressBook) -> BookResult<()>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}

/// A book stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    rules: PhoneRules,
}

impl JsonFileStore {
    /// Create a store for `path` that validates phones with `rules` on load.
    pub fn new(path: impl Into<PathBuf>, rules: PhoneRules) -> Self {
        Self {
            path: path.into(),
            rules,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> BookResult<AddressBook> {
        load_book(&self.path, &self.rules)
    }

    fn save(&self, book: &AddressBook) -> BookResult<()> {
        save_book(book, &self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
