//! AddressBook: the keyed collection of records.

use crate::domain::{today, Name, PhoneRules};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::search::{self, RecordMatch};
use crate::storage;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;

/// A collection of records keyed by contact name.
///
/// Adding a record whose name is already present replaces the old one.
/// Iteration is in name order. The book also carries the phone rules used
/// to validate phones entered into it; each instance is independent, there
/// is no shared state between books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
    phone_rules: PhoneRules,
}

impl AddressBook {
    /// Create an empty book with the default phone rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty book that validates phones with `rules`.
    pub fn with_phone_rules(rules: PhoneRules) -> Self {
        Self {
            records: BTreeMap::new(),
            phone_rules: rules,
        }
    }

    pub fn phone_rules(&self) -> &PhoneRules {
        &self.phone_rules
    }

    /// Insert `record` under its name. Returns the record it replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().as_str().to_string(), record)
    }

    /// Remove the record named `name`. Absent names are a no-op.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name.trim())
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name.trim())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name.trim())
    }

    /// Like [`get_mut`](Self::get_mut), but a missing record is an error.
    pub fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name.trim())
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Give the record `old` a new name, moving it to the new key.
    ///
    /// A record already stored under `new_name` is replaced.
    pub fn rename_record(&mut self, old: &str, new_name: Name) -> BookResult<()> {
        let mut record = self
            .records
            .remove(old.trim())
            .ok_or_else(|| BookError::NotFound(old.to_string()))?;
        record.set_name(new_name);
        self.add_record(record);
        Ok(())
    }

    /// Add a phone to the record `name`, validated with this book's rules.
    ///
    /// Returns `Ok(false)` when the number is already present.
    pub fn add_phone(&mut self, name: &str, raw: &str) -> BookResult<bool> {
        let phone = self.phone_rules.parse(raw)?;
        Ok(self.record_mut(name)?.add_phone_value(phone))
    }

    /// Add every number in a comma/space separated list to the record `name`.
    pub fn add_phones(&mut self, name: &str, raw: &str) -> BookResult<usize> {
        let phones = self.phone_rules.parse_list(raw)?;
        let record = self.record_mut(name)?;
        Ok(phones
            .into_iter()
            .filter(|phone| record.add_phone_value(phone.clone()))
            .count())
    }

    /// Replace phone `old` of the record `name`, validating `new` with this
    /// book's rules. Returns `Ok(false)` when `old` is not present.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<bool> {
        let phone = self.phone_rules.parse(new)?;
        Ok(self.record_mut(name)?.edit_phone_value(old, phone))
    }

    /// Records whose name, any phone, or any email contains `query`, ignoring case.
    pub fn search_records(&self, query: &str) -> Vec<&Record> {
        search::search_records(self.iter(), query)
    }

    /// Search results with the matching field values.
    pub fn search_matches(&self, query: &str) -> Vec<RecordMatch<'_>> {
        search::search_matches(self.iter(), query)
    }

    /// Records whose next birthday is exactly `days` days from today.
    pub fn get_upcoming_birthday_contacts(&self, days: u32) -> Vec<&Record> {
        self.get_upcoming_birthday_contacts_on(days, today())
    }

    /// Records whose next birthday is exactly `days` days from `today`.
    pub fn get_upcoming_birthday_contacts_on(&self, days: u32, today: NaiveDate) -> Vec<&Record> {
        self.iter()
            .filter(|record| record.days_to_birthday_on(today) == Some(days))
            .collect()
    }

    /// Records whose next birthday is at most `days` days from today.
    pub fn get_birthdays_within(&self, days: u32) -> Vec<&Record> {
        self.get_birthdays_within_on(days, today())
    }

    /// Records whose next birthday is at most `days` days from `today`,
    /// soonest first, ties in name order.
    pub fn get_birthdays_within_on(&self, days: u32, today: NaiveDate) -> Vec<&Record> {
        let mut upcoming: Vec<(u32, &Record)> = self
            .iter()
            .filter_map(|record| {
                record
                    .days_to_birthday_on(today)
                    .filter(|&left| left <= days)
                    .map(|left| (left, record))
            })
            .collect();
        // Stable sort keeps name order for equal distances.
        upcoming.sort_by_key(|(left, _)| *left);
        upcoming.into_iter().map(|(_, record)| record).collect()
    }

    /// Write the whole book to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Io` if the destination cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> BookResult<()> {
        storage::save_book(self, path.as_ref())
    }

    /// Load a book from `path` with the default phone rules.
    ///
    /// A missing file yields an empty book. A file that exists but is not a
    /// valid book document, or holds an invalid record, is an error.
    pub fn load_from_file(path: impl AsRef<Path>) -> BookResult<Self> {
        Self::load_from_file_with(path, &PhoneRules::default())
    }

    /// Load a book from `path`, validating phones with `rules`.
    pub fn load_from_file_with(path: impl AsRef<Path>, rules: &PhoneRules) -> BookResult<Self> {
        storage::load_book(path.as_ref(), rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Birthday, Email, Phone};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            Address::new("Main St").unwrap(),
            Vec::new(),
            Vec::new(),
            birthday.map(|b| Birthday::parse_on(b, ymd(2024, 1, 1)).unwrap()),
        )
    }

    #[test]
    fn test_add_record_last_write_wins() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Jane", None)).is_none());

        let mut replacement = record("Jane", None);
        replacement.set_address(Address::new("Elm St").unwrap());
        let previous = book.add_record(replacement);

        assert!(previous.is_some());
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Jane").unwrap().address().as_str(), "Elm St");
    }

    #[test]
    fn test_remove_record_idempotent() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", None));
        assert!(book.remove_record("Jane").is_some());
        assert!(book.remove_record("Jane").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_record_mut_not_found() {
        let mut book = AddressBook::new();
        assert!(matches!(
            book.record_mut("Nobody"),
            Err(BookError::NotFound(name)) if name == "Nobody"
        ));
    }

    #[test]
    fn test_rename_record_rekeys() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", None));
        book.rename_record("Jane", Name::new("Jane Doe").unwrap()).unwrap();

        assert!(!book.contains("Jane"));
        assert_eq!(book.get("Jane Doe").unwrap().name().as_str(), "Jane Doe");
        assert!(book.rename_record("Jane", Name::new("X").unwrap()).is_err());
    }

    #[test]
    fn test_search_records_exactly_once() {
        let mut book = AddressBook::new();
        let mut jane = record("Jane Doe", None);
        jane.add_email("x@jane.com").unwrap();
        book.add_record(jane);
        book.add_record(record("Bob", None));

        let results = book.search_records("jane");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "Jane Doe");
    }

    #[test]
    fn test_upcoming_birthdays_exact_day() {
        let mut book = AddressBook::new();
        book.add_record(record("A", Some("1990-05-20")));
        book.add_record(record("B", Some("1985-05-21")));
        book.add_record(record("C", None));

        let today = ymd(2024, 5, 15);
        let names: Vec<&str> = book
            .get_upcoming_birthday_contacts_on(5, today)
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["A"]);
        assert!(book.get_upcoming_birthday_contacts_on(4, today).is_empty());
    }

    #[test]
    fn test_birthdays_within_sorted_by_proximity() {
        let mut book = AddressBook::new();
        book.add_record(record("Later", Some("1990-05-25")));
        book.add_record(record("Sooner", Some("1990-05-16")));
        book.add_record(record("Today", Some("2000-05-15")));
        book.add_record(record("Outside", Some("1990-07-01")));

        let names: Vec<&str> = book
            .get_birthdays_within_on(10, ymd(2024, 5, 15))
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["Today", "Sooner", "Later"]);
    }

    #[test]
    fn test_with_phone_rules() {
        let book = AddressBook::with_phone_rules(PhoneRules::digits_only());
        assert!(book.phone_rules().parse("050-1234567").is_err());
        assert!(AddressBook::new().phone_rules().parse("050-1234567").is_ok());
    }

    #[test]
    fn test_lookups_ignore_surrounding_whitespace() {
        let mut book = AddressBook::new();
        book.add_record(record(" Jane ", None));

        assert!(book.contains(" Jane "));
        assert_eq!(book.get("Jane ").unwrap().name().as_str(), "Jane");
        assert!(book.record_mut("  Jane").is_ok());
        assert!(book.remove_record(" Jane ").is_some());
    }

    #[test]
    fn test_strict_book_phone_edits_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let strict = PhoneRules::digits_only();

        let mut book = AddressBook::with_phone_rules(strict.clone());
        book.add_record(record("Jane", None));
        assert!(book.add_phone("Jane", "050-1234567").is_err());
        assert!(book.add_phone("Jane", "0501234567").unwrap());
        assert!(book
            .edit_phone("Jane", "0501234567", "+380501234567")
            .is_err());
        assert_eq!(book.add_phones("Jane", "0507654321 0501234567").unwrap(), 1);

        book.save_to_file(&path).unwrap();
        let loaded = AddressBook::load_from_file_with(&path, &strict).unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");

        let mut book = AddressBook::new();
        book.add_record(Record::new(
            Name::new("Jane Doe").unwrap(),
            Address::new("12 Main St").unwrap(),
            vec![Phone::new("0501234567").unwrap()],
            vec![Email::new("jane@example.com").unwrap()],
            Some(Birthday::parse("1990-05-20").unwrap()),
        ));
        book.add_record(record("No Birthday", None));

        book.save_to_file(&path).unwrap();
        let loaded = AddressBook::load_from_file(&path).unwrap();
        assert_eq!(loaded, book);
    }
}
