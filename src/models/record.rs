//! Record model: one contact in the address book.

use crate::domain::{
    today, Address, Birthday, Email, Name, Phone, PhoneRules, ValidationResult,
};
use chrono::NaiveDate;
use std::fmt;

/// Width of the separator line that ends a rendered record.
const SEPARATOR_WIDTH: usize = 30;

/// A contact with validated fields.
///
/// Phones and emails are ordered and free of exact duplicates. Every
/// mutator validates its input before touching the record, so a rejected
/// value never leaves a partial change behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    address: Address,
    phones: Vec<Phone>,
    emails: Vec<Email>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record from already validated fields.
    ///
    /// Repeated phones or emails keep only their first occurrence.
    pub fn new(
        name: Name,
        address: Address,
        phones: Vec<Phone>,
        emails: Vec<Email>,
        birthday: Option<Birthday>,
    ) -> Self {
        let mut record = Self {
            name,
            address,
            phones: Vec::with_capacity(phones.len()),
            emails: Vec::with_capacity(emails.len()),
            birthday,
        };
        for phone in phones {
            push_unique(&mut record.phones, phone);
        }
        for email in emails {
            push_unique(&mut record.emails, email);
        }
        record
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Renaming changes the book key, so only the book may do it.
    pub(crate) fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Validate `raw` with `rules` and append it.
    ///
    /// Returns `Ok(false)` when the number is already present.
    pub fn add_phone(&mut self, raw: &str, rules: &PhoneRules) -> ValidationResult<bool> {
        let phone = rules.parse(raw)?;
        Ok(self.add_phone_value(phone))
    }

    /// Append an already validated phone unless it is present.
    pub fn add_phone_value(&mut self, phone: Phone) -> bool {
        push_unique(&mut self.phones, phone)
    }

    /// Add every number in a comma/space separated list.
    ///
    /// All pieces are validated before any is added. Returns how many were new.
    pub fn add_phones(&mut self, raw: &str, rules: &PhoneRules) -> ValidationResult<usize> {
        let phones = rules.parse_list(raw)?;
        Ok(phones
            .into_iter()
            .filter(|phone| push_unique(&mut self.phones, phone.clone()))
            .count())
    }

    /// Remove every phone equal to `raw`. Absent numbers are a no-op.
    pub fn delete_phone(&mut self, raw: &str) -> bool {
        let target = raw.trim();
        remove_all(&mut self.phones, |phone| phone.as_str() == target)
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated with `rules` first. Returns `Ok(false)` when `old`
    /// is not present.
    pub fn edit_phone(
        &mut self,
        old: &str,
        new: &str,
        rules: &PhoneRules,
    ) -> ValidationResult<bool> {
        let phone = rules.parse(new)?;
        Ok(self.edit_phone_value(old, phone))
    }

    /// Replace the first phone equal to `old` with an already validated phone.
    ///
    /// If `new` is already stored elsewhere the old entry is dropped instead,
    /// so the list never holds duplicates.
    pub fn edit_phone_value(&mut self, old: &str, new: Phone) -> bool {
        let target = old.trim();
        let replaced = replace_first(&mut self.phones, |phone| phone.as_str() == target, new);
        if !replaced {
            tracing::debug!(record = %self.name, phone = %target, "Phone to edit not found");
        }
        replaced
    }

    /// Validate `raw` and append it unless already present.
    pub fn add_email(&mut self, raw: &str) -> ValidationResult<bool> {
        let email = Email::new(raw)?;
        Ok(push_unique(&mut self.emails, email))
    }

    /// Remove every email equal to `raw`. Absent addresses are a no-op.
    pub fn delete_email(&mut self, raw: &str) -> bool {
        let target = raw.trim();
        remove_all(&mut self.emails, |email| email.as_str() == target)
    }

    /// Replace the first email equal to `old` with validated `new`.
    pub fn edit_email(&mut self, old: &str, new: &str) -> ValidationResult<bool> {
        let email = Email::new(new)?;
        let target = old.trim();
        let replaced = replace_first(&mut self.emails, |e| e.as_str() == target, email);
        if !replaced {
            tracing::debug!(record = %self.name, email = %target, "Email to edit not found");
        }
        Ok(replaced)
    }

    /// Days until the next birthday, counted from today.
    pub fn days_to_birthday(&self) -> Option<u32> {
        self.days_to_birthday_on(today())
    }

    /// Days until the next birthday, counted from `today`.
    ///
    /// `None` when the record has no birthday.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<u32> {
        self.birthday.and_then(|birthday| birthday.days_until_on(today))
    }

    /// Case-insensitive substring match on name, any phone, or any email.
    ///
    /// `query` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        self.name.as_str().to_lowercase().contains(query)
            || self
                .phones
                .iter()
                .any(|phone| phone.as_str().to_lowercase().contains(query))
            || self
                .emails
                .iter()
                .any(|email| email.as_str().to_lowercase().contains(query))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Phones:")?;
        for phone in &self.phones {
            writeln!(f, "  {}", phone)?;
        }
        writeln!(f, "Emails:")?;
        for email in &self.emails {
            writeln!(f, "  {}", email)?;
        }
        if let Some(birthday) = self.birthday {
            writeln!(f, "Birthday: {}", birthday)?;
        }
        write!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        return false;
    }
    items.push(item);
    true
}

fn remove_all<T>(items: &mut Vec<T>, mut is_target: impl FnMut(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !is_target(item));
    items.len() != before
}

fn replace_first<T: PartialEq>(
    items: &mut Vec<T>,
    is_target: impl Fn(&T) -> bool,
    new: T,
) -> bool {
    let Some(index) = items.iter().position(is_target) else {
        return false;
    };
    let duplicate = items
        .iter()
        .enumerate()
        .any(|(i, item)| i != index && *item == new);
    if duplicate {
        items.remove(index);
    } else {
        items[index] = new;
    }
    true
}
