//! Test fixtures and sample data.
//!
//! This module provides reusable records and dates for integration tests.

#![allow(dead_code)]

use addressbook::{Address, AddressBook, Birthday, Email, Name, Phone, Record};
use chrono::NaiveDate;

/// Shorthand for a calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A fixed "today" far enough in the future that every sample birthday is valid.
pub fn fixed_today() -> NaiveDate {
    ymd(2024, 5, 25)
}

/// Create a record from raw strings, panicking on invalid input.
pub fn sample_record(
    name: &str,
    phones: &[&str],
    emails: &[&str],
    birthday: Option<&str>,
) -> Record {
    Record::new(
        Name::new(name).unwrap(),
        Address::new(format!("{} Street 1", name)).unwrap(),
        phones.iter().map(|p| Phone::new(p).unwrap()).collect(),
        emails.iter().map(|e| Email::new(e).unwrap()).collect(),
        birthday.map(|b| Birthday::parse_on(b, fixed_today()).unwrap()),
    )
}

/// A small book with overlapping names, phones, and emails.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "Jane Doe",
        &["0501234567"],
        &["x@jane.com"],
        Some("1990-05-20"),
    ));
    book.add_record(sample_record(
        "John Smith",
        &["050-7654321", "+380671112233"],
        &["john@example.com", "js@work.org"],
        Some("1985-06-01"),
    ));
    book.add_record(sample_record(
        "Mary Jane Watson",
        &["+38-063-5550000"],
        &[],
        None,
    ));
    book.add_record(sample_record("Leap Year", &[], &["leap@feb.net"], Some("2000-02-29")));
    book
}

/// Names of `records`, in order.
pub fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.name().as_str()).collect()
}
