//! Book file I/O.
//!
//! - Atomic writes: the document goes to `<file>.tmp` first and is renamed
//!   over the destination, so readers see either the old or the new file.
//! - Missing file on load yields an empty book.
//! - Any other read or parse failure is returned to the caller.

use super::codec;
use crate::book::AddressBook;
use crate::domain::{today, PhoneRules};
use crate::error::{BookError, BookResult};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Write `book` to `path`, replacing any existing file.
pub fn save_book(book: &AddressBook, path: &Path) -> BookResult<()> {
    let json = codec::encode(book)?;

    let temp_path = temp_path(path);
    fs::write(&temp_path, json.as_bytes()).map_err(|source| BookError::Io {
        path: temp_path.clone(),
        source,
    })?;

    if let Err(source) = fs::rename(&temp_path, path) {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!("Failed to remove temp file {}: {}", temp_path.display(), e);
        }
        return Err(BookError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(records = book.len(), "Address book saved to {}", path.display());
    Ok(())
}

/// Read a book from `path`, validating every record with `rules`.
pub fn load_book(path: &Path, rules: &PhoneRules) -> BookResult<AddressBook> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Book file does not exist, starting empty: {}", path.display());
            return Ok(AddressBook::with_phone_rules(rules.clone()));
        }
        Err(source) => {
            return Err(BookError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let book = codec::decode(&text, path, rules, today())?;
    tracing::info!(records = book.len(), "Address book loaded from {}", path.display());
    Ok(book)
}

/// Get path to temporary file for atomic writes
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
