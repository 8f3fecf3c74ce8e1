//! JSON document codec for address books.
//!
//! On-disk shape:
//!
//! ```json
//! {
//!   "records": [
//!     {
//!       "name": "Jane Doe",
//!       "address": "12 Main St",
//!       "phones": ["0501234567"],
//!       "emails": ["jane@example.com"],
//!       "birthday": "1990-05-20"
//!     }
//!   ]
//! }
//! ```
//!
//! Every key is required. `birthday` is an ISO date string or `null`.

use crate::book::AddressBook;
use crate::domain::{Address, Birthday, Email, Name, PhoneRules, ValidationResult};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level book document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDocument {
    pub records: Vec<RecordDocument>,
}

/// One record as stored on disk. Values are raw, unvalidated strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordDocument {
    pub name: String,
    pub address: String,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    /// Required key; `null` when the record has no birthday.
    #[serde(deserialize_with = "Option::deserialize")]
    pub birthday: Option<String>,
}

impl From<&Record> for RecordDocument {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            address: record.address().to_string(),
            phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
            emails: record.emails().iter().map(|e| e.as_str().to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
        }
    }
}

impl RecordDocument {
    /// Rebuild a record, running every value through its validator.
    pub fn into_record(self, rules: &PhoneRules, today: NaiveDate) -> ValidationResult<Record> {
        let name = Name::new(&self.name)?;
        let address = Address::new(&self.address)?;
        let phones = self
            .phones
            .iter()
            .map(|phone| rules.parse(phone))
            .collect::<ValidationResult<Vec<_>>>()?;
        let emails = self
            .emails
            .iter()
            .map(Email::new)
            .collect::<ValidationResult<Vec<_>>>()?;
        let birthday = self
            .birthday
            .as_deref()
            .map(|raw| Birthday::parse_on(raw, today))
            .transpose()?;

        Ok(Record::new(name, address, phones, emails, birthday))
    }
}

impl From<&AddressBook> for BookDocument {
    fn from(book: &AddressBook) -> Self {
        Self {
            records: book.iter().map(RecordDocument::from).collect(),
        }
    }
}

/// Serialize a book to pretty-printed JSON.
pub fn encode(book: &AddressBook) -> BookResult<String> {
    serde_json::to_string_pretty(&BookDocument::from(book)).map_err(BookError::Serialize)
}

/// Parse and validate a book document.
///
/// `path` is only used to label errors. The first invalid record aborts the
/// decode with its index, name, and the failing field.
pub fn decode(
    text: &str,
    path: &Path,
    rules: &PhoneRules,
    today: NaiveDate,
) -> BookResult<AddressBook> {
    let document: BookDocument =
        serde_json::from_str(text).map_err(|source| BookError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut book = AddressBook::with_phone_rules(rules.clone());
    for (index, record_doc) in document.records.into_iter().enumerate() {
        let name = record_doc.name.clone();
        let record = record_doc
            .into_record(rules, today)
            .map_err(|source| BookError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                name,
                source,
            })?;
        book.add_record(record);
    }
    Ok(book)
}
