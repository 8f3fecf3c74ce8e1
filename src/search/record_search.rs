//! Case-insensitive substring search over records.
//!
//! A record is matched against its name, every phone, and every email. Each
//! record is visited once, so a record matching in several fields still
//! appears exactly once in the results.

use crate::models::Record;

/// Field a query matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Name,
    Phone,
    Email,
}

impl MatchField {
    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

/// One matching field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: MatchField,
    pub value: String,
}

/// A matched record with every field that matched.
#[derive(Debug, Clone)]
pub struct RecordMatch<'a> {
    pub record: &'a Record,
    pub matches: Vec<FieldMatch>,
}

/// Records whose name, any phone, or any email contains `query`, ignoring case.
///
/// Results keep the iteration order of `records`. An empty query matches
/// every record.
pub fn search_records<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    query: &str,
) -> Vec<&'a Record> {
    let query_lower = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.matches_lowercase(&query_lower))
        .collect()
}

/// Like [`search_records`], but reports which field values matched.
pub fn search_matches<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    query: &str,
) -> Vec<RecordMatch<'a>> {
    let query_lower = query.to_lowercase();
    records
        .into_iter()
        .filter_map(|record| {
            let matches = field_matches(record, &query_lower);
            if matches.is_empty() {
                None
            } else {
                Some(RecordMatch { record, matches })
            }
        })
        .collect()
}

fn field_matches(record: &Record, query_lower: &str) -> Vec<FieldMatch> {
    let name = std::iter::once((MatchField::Name, record.name().as_str()));
    let phones = record
        .phones()
        .iter()
        .map(|phone| (MatchField::Phone, phone.as_str()));
    let emails = record
        .emails()
        .iter()
        .map(|email| (MatchField::Email, email.as_str()));

    name.chain(phones)
        .chain(emails)
        .filter(|(_, value)| value.to_lowercase().contains(query_lower))
        .map(|(field, value)| FieldMatch {
            field,
            value: value.to_string(),
        })
        .collect()
}
