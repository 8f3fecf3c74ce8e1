//! Birthday value object and next-occurrence arithmetic.

use super::errors::{ValidationError, ValidationResult};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Date format used for input and on disk.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono's %Y-%m-%d also takes unpadded fields and signed years.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A validated birthday: a calendar date not after the day it was validated.
///
/// Validity is checked once at construction. A stored date stays valid
/// forever since past dates stay past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Validate `date` against today's date.
    pub fn new(date: NaiveDate) -> ValidationResult<Self> {
        Self::new_on(date, today())
    }

    /// Validate `date` against an explicit "today".
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::FutureBirthday` if `date` is after `today`.
    pub fn new_on(date: NaiveDate, today: NaiveDate) -> ValidationResult<Self> {
        if !validate_birthday_on(date, today) {
            return Err(ValidationError::FutureBirthday(
                date.format(BIRTHDAY_FORMAT).to_string(),
            ));
        }
        Ok(Self(date))
    }

    /// Parse a `YYYY-MM-DD` string and validate it against today's date.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        Self::parse_on(raw, today())
    }

    /// Parse a `YYYY-MM-DD` string and validate it against an explicit "today".
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for text that is not a
    /// calendar date, `ValidationError::FutureBirthday` for a future date.
    pub fn parse_on(raw: &str, today: NaiveDate) -> ValidationResult<Self> {
        let value = raw.trim();
        if !ISO_DATE_RE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;
        Self::new_on(date, today).map_err(|_| ValidationError::FutureBirthday(raw.to_string()))
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday is observed on in `year`.
    ///
    /// Feb 29 falls back to Feb 28 in non-leap years.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The next observed date on or after `today`.
    pub fn next_occurrence_on(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.observed_in(today.year()) {
            Some(date) if date >= today => Some(date),
            _ => self.observed_in(today.year() + 1),
        }
    }

    /// Days from `today` until the next occurrence; 0 when it is today.
    ///
    /// `None` only when the next occurrence falls outside chrono's date range.
    pub fn days_until_on(&self, today: NaiveDate) -> Option<u32> {
        let next = self.next_occurrence_on(today)?;
        u32::try_from((next - today).num_days()).ok()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Check that `date` is not after today's date.
pub fn validate_birthday(date: NaiveDate) -> bool {
    validate_birthday_on(date, today())
}

/// Check that `date` is not after `today`.
pub fn validate_birthday_on(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}
