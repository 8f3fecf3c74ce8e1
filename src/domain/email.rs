//! Email value object.

use super::errors::{ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+(\.\w+)+$").unwrap());

/// A validated email address.
///
/// Validation is a shape check only: word, dot, or dash characters, an `@`,
/// more of the same, then at least one `.tld` segment. No DNS lookup is made.
///
/// # Example
///
/// ```
/// use addressbook::domain::Email;
///
/// let email = Email::new("jane@example.com").unwrap();
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// Surrounding whitespace is trimmed before the check.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(raw: impl AsRef<str>) -> ValidationResult<Self> {
        let raw = raw.as_ref();
        let value = raw.trim();

        if !validate_email(value) {
            return Err(ValidationError::InvalidEmail(raw.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check whether `value` has the `local@domain.tld` shape.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
