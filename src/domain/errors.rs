//! Field validation errors.

use std::fmt;

/// The kind of field a value was validated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Address,
    Phone,
    Email,
    Birthday,
}

impl FieldKind {
    /// Get display name for the field kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Errors that can occur while constructing a field value.
///
/// Every variant carries the raw input that was rejected so callers can
/// report the exact offending value back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name or address was empty after trimming.
    Empty(FieldKind),

    /// The phone number matches none of the accepted shapes.
    InvalidPhone(String),

    /// The email address does not have the `local@domain.tld` shape.
    InvalidEmail(String),

    /// The birthday is not a `YYYY-MM-DD` calendar date.
    InvalidBirthday(String),

    /// The birthday lies after the validation date.
    FutureBirthday(String),
}

impl ValidationError {
    /// The field kind that failed validation.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Empty(kind) => *kind,
            Self::InvalidPhone(_) => FieldKind::Phone,
            Self::InvalidEmail(_) => FieldKind::Email,
            Self::InvalidBirthday(_) | Self::FutureBirthday(_) => FieldKind::Birthday,
        }
    }

    /// The raw value that was rejected.
    pub fn value(&self) -> &str {
        match self {
            Self::Empty(_) => "",
            Self::InvalidPhone(v)
            | Self::InvalidEmail(v)
            | Self::InvalidBirthday(v)
            | Self::FutureBirthday(v) => v,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(kind) => write!(f, "{} cannot be empty", kind),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday (expected YYYY-MM-DD): {}", date)
            }
            Self::FutureBirthday(date) => write!(f, "Birthday is in the future: {}", date),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for field construction results.
pub type ValidationResult<T> = Result<T, ValidationError>;
