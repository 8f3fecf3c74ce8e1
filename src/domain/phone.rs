//! Phone value object and the configurable phone rule set.

use super::errors::{ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static DIGITS10_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static LOCAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{7}$").unwrap());
static INTERNATIONAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{2}-[0-9]{3}-[0-9]{7}$").unwrap());
static INTERNATIONAL_COMPACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{12}$").unwrap());

/// One accepted phone number shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneFormat {
    /// Ten bare digits: `0501234567`
    Digits10,
    /// Hyphenated local number: `050-1234567`
    Local,
    /// Hyphenated international number: `+38-050-1234567`
    International,
    /// Plus sign followed by twelve digits: `+380501234567`
    InternationalCompact,
}

impl PhoneFormat {
    /// All shapes, in the order they are tried.
    pub const ALL: [PhoneFormat; 4] = [
        PhoneFormat::Digits10,
        PhoneFormat::Local,
        PhoneFormat::International,
        PhoneFormat::InternationalCompact,
    ];

    /// Check whether `value` has exactly this shape.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Digits10 => DIGITS10_RE.is_match(value),
            Self::Local => LOCAL_RE.is_match(value),
            Self::International => INTERNATIONAL_RE.is_match(value),
            Self::InternationalCompact => INTERNATIONAL_COMPACT_RE.is_match(value),
        }
    }

    /// Configuration name of the shape.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digits10 => "digits10",
            Self::Local => "local",
            Self::International => "international",
            Self::InternationalCompact => "international-compact",
        }
    }
}

impl FromStr for PhoneFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown phone format '{}'", s.trim()))
    }
}

impl fmt::Display for PhoneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of phone shapes a book accepts.
///
/// A value is valid when it matches at least one configured shape. The
/// default accepts every shape in [`PhoneFormat::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRules {
    formats: Vec<PhoneFormat>,
}

impl PhoneRules {
    /// Build a rule set from an explicit list of shapes.
    ///
    /// Duplicates are dropped. Returns `None` for an empty list, since a
    /// rule set that accepts nothing would make every phone invalid.
    pub fn new(formats: impl IntoIterator<Item = PhoneFormat>) -> Option<Self> {
        let mut unique = Vec::new();
        for format in formats {
            if !unique.contains(&format) {
                unique.push(format);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(Self { formats: unique })
        }
    }

    /// Only ten bare digits.
    pub fn digits_only() -> Self {
        Self {
            formats: vec![PhoneFormat::Digits10],
        }
    }

    /// The accepted shapes.
    pub fn formats(&self) -> &[PhoneFormat] {
        &self.formats
    }

    /// Check a single, already trimmed phone number.
    pub fn is_valid(&self, value: &str) -> bool {
        self.formats.iter().any(|format| format.matches(value))
    }

    /// Validate a single phone number against these rules.
    pub fn parse(&self, raw: &str) -> ValidationResult<Phone> {
        let value = raw.trim();
        if !self.is_valid(value) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(Phone(value.to_string()))
    }

    /// Split free-form input on commas and whitespace and validate every piece.
    ///
    /// Either every number is valid and all are returned, or the first
    /// invalid piece is reported and nothing is returned.
    pub fn parse_list(&self, raw: &str) -> ValidationResult<Vec<Phone>> {
        let pieces: Vec<&str> = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty())
            .collect();

        if pieces.is_empty() {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        pieces.into_iter().map(|piece| self.parse(piece)).collect()
    }
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            formats: PhoneFormat::ALL.to_vec(),
        }
    }
}

/// A validated phone number.
///
/// The stored text is the trimmed input, unchanged otherwise, so equality
/// is exact string equality.
///
/// # Example
///
/// ```
/// use addressbook::domain::Phone;
///
/// let phone = Phone::new("050-1234567").unwrap();
/// assert_eq!(phone.as_str(), "050-1234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone using the default rule set.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value matches no accepted shape.
    pub fn new(raw: impl AsRef<str>) -> ValidationResult<Self> {
        PhoneRules::default().parse(raw.as_ref())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a phone number against the default rule set.
pub fn validate_phone(value: &str) -> bool {
    PhoneRules::default().is_valid(value)
}
