//! Free-text value objects: Name and Address.

use super::errors::{FieldKind, ValidationError, ValidationResult};
use std::fmt;

fn non_empty(raw: &str, kind: FieldKind) -> ValidationResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty(kind));
    }
    Ok(value.to_string())
}

/// A contact name. Also the key of the record in its address book.
///
/// # Example
///
/// ```
/// use addressbook::domain::Name;
///
/// let name = Name::new("Jane Doe").unwrap();
/// assert_eq!(name.as_str(), "Jane Doe");
/// assert!(Name::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting empty input.
    pub fn new(raw: impl AsRef<str>) -> ValidationResult<Self> {
        non_empty(raw.as_ref(), FieldKind::Name).map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A postal address. Any non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Create a new Address, rejecting empty input.
    pub fn new(raw: impl AsRef<str>) -> ValidationResult<Self> {
        non_empty(raw.as_ref(), FieldKind::Address).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
