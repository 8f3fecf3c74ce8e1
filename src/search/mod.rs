//! Record search.
//!
//! This module provides the case-insensitive substring search used by
//! `AddressBook::search_records`, plus a variant that reports match context.

pub mod record_search;

pub use record_search::{search_matches, search_records, FieldMatch, MatchField, RecordMatch};
