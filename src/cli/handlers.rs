//! Command handlers.

use super::Command;
use crate::book::AddressBook;
use crate::domain::{Address, Birthday, Email, Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::storage::BookStore;

/// Result of running one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text to print, one entry per line or rendered record
    pub lines: Vec<String>,

    /// Whether the book changed and must be saved
    pub modified: bool,
}

impl CommandOutput {
    fn changed(line: String) -> Self {
        Self {
            lines: vec![line],
            modified: true,
        }
    }

    fn unchanged(line: String) -> Self {
        Self {
            lines: vec![line],
            modified: false,
        }
    }

    fn records<'a>(records: impl IntoIterator<Item = &'a Record>, empty: &str) -> Self {
        let mut lines: Vec<String> = records.into_iter().map(Record::to_string).collect();
        if lines.is_empty() {
            lines.push(empty.to_string());
        }
        Self {
            lines,
            modified: false,
        }
    }
}

/// Load the book from `store`, run `command`, and save if it changed.
pub fn run(store: &dyn BookStore, command: &Command) -> BookResult<CommandOutput> {
    let mut book = store.load()?;
    let output = execute(&mut book, command)?;
    if output.modified {
        store.save(&book)?;
        tracing::debug!("Saved changes to {}", store.location());
    }
    Ok(output)
}

/// Run `command` against an in-memory book.
///
/// Validation and lookup failures are returned before anything changes.
pub fn execute(book: &mut AddressBook, command: &Command) -> BookResult<CommandOutput> {
    match command {
        Command::List => Ok(CommandOutput::records(book.iter(), "Address book is empty.")),

        Command::Show { name } => {
            let record = book
                .get(name)
                .ok_or_else(|| BookError::NotFound(name.clone()))?;
            Ok(CommandOutput::unchanged(record.to_string()))
        }

        Command::Add {
            name,
            address,
            phones,
            emails,
            birthday,
        } => {
            let rules = book.phone_rules();
            let name = Name::new(name)?;
            let address = Address::new(address)?;
            let mut parsed_phones: Vec<Phone> = Vec::new();
            for raw in phones {
                parsed_phones.extend(rules.parse_list(raw)?);
            }
            let parsed_emails = emails
                .iter()
                .map(Email::new)
                .collect::<Result<Vec<_>, _>>()?;
            let birthday = birthday.as_deref().map(Birthday::parse).transpose()?;

            let record = Record::new(name, address, parsed_phones, parsed_emails, birthday);
            let label = record.name().to_string();
            let verb = if book.add_record(record).is_some() {
                "replaced"
            } else {
                "added"
            };
            Ok(CommandOutput::changed(format!("Contact {} {}.", label, verb)))
        }

        Command::Delete { name } => Ok(match book.remove_record(name) {
            Some(_) => CommandOutput::changed(format!("Contact {} deleted.", name)),
            None => CommandOutput::unchanged(format!("No contact named {}.", name)),
        }),

        Command::Rename { name, new_name } => {
            let new_name = Name::new(new_name)?;
            let label = new_name.to_string();
            book.rename_record(name, new_name)?;
            Ok(CommandOutput::changed(format!(
                "Contact {} renamed to {}.",
                name, label
            )))
        }

        Command::SetAddress { name, address } => {
            let address = Address::new(address)?;
            book.record_mut(name)?.set_address(address);
            Ok(CommandOutput::changed(format!("Address updated for {}.", name)))
        }

        Command::SetBirthday { name, birthday } => {
            let birthday = Birthday::parse(birthday)?;
            book.record_mut(name)?.set_birthday(birthday);
            Ok(CommandOutput::changed(format!("Birthday updated for {}.", name)))
        }

        Command::ClearBirthday { name } => {
            let record = book.record_mut(name)?;
            if record.birthday().is_none() {
                return Ok(CommandOutput::unchanged(format!("{} has no birthday.", name)));
            }
            record.clear_birthday();
            Ok(CommandOutput::changed(format!("Birthday removed for {}.", name)))
        }

        Command::AddPhone { name, phones } => {
            let added = book.add_phones(name, phones)?;
            Ok(CommandOutput {
                lines: vec![format!("Added {} new phone number(s) to {}.", added, name)],
                modified: added > 0,
            })
        }

        Command::EditPhone { name, old, new } => {
            Ok(if book.edit_phone(name, old, new)? {
                CommandOutput::changed(format!("Phone number updated for {}.", name))
            } else {
                CommandOutput::unchanged(format!("{} has no phone number {}.", name, old))
            })
        }

        Command::DeletePhone { name, phone } => {
            Ok(if book.record_mut(name)?.delete_phone(phone) {
                CommandOutput::changed(format!("Phone number {} removed from {}.", phone, name))
            } else {
                CommandOutput::unchanged(format!("{} has no phone number {}.", name, phone))
            })
        }

        Command::AddEmail { name, email } => {
            Ok(if book.record_mut(name)?.add_email(email)? {
                CommandOutput::changed(format!("Email {} added to {}.", email, name))
            } else {
                CommandOutput::unchanged(format!("{} already has email {}.", name, email))
            })
        }

        Command::EditEmail { name, old, new } => {
            Ok(if book.record_mut(name)?.edit_email(old, new)? {
                CommandOutput::changed(format!("Email address updated for {}.", name))
            } else {
                CommandOutput::unchanged(format!("{} has no email {}.", name, old))
            })
        }

        Command::DeleteEmail { name, email } => {
            Ok(if book.record_mut(name)?.delete_email(email) {
                CommandOutput::changed(format!("Email {} removed from {}.", email, name))
            } else {
                CommandOutput::unchanged(format!("{} has no email {}.", name, email))
            })
        }

        Command::Search { query } => Ok(CommandOutput::records(
            book.search_records(query),
            "No matching records found.",
        )),

        Command::Birthdays { days, within } => {
            let records = if *within {
                book.get_birthdays_within(*days)
            } else {
                book.get_upcoming_birthday_contacts(*days)
            };
            Ok(CommandOutput::records(records, "No upcoming birthdays found."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneRules;

    fn add_jane(book: &mut AddressBook) {
        execute(
            book,
            &Command::Add {
                name: "Jane Doe".to_string(),
                address: "12 Main St".to_string(),
                phones: vec!["0501234567, 050-7654321".to_string()],
                emails: vec!["jane@example.com".to_string()],
                birthday: Some("1990-05-20".to_string()),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_add_then_show() {
        let mut book = AddressBook::new();
        add_jane(&mut book);

        let output = execute(
            &mut book,
            &Command::Show {
                name: "Jane Doe".to_string(),
            },
        )
        .unwrap();
        assert!(!output.modified);
        assert!(output.lines[0].contains("050-7654321"));
        assert_eq!(book.get("Jane Doe").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_invalid_leaves_book_untouched() {
        let mut book = AddressBook::new();
        let result = execute(
            &mut book,
            &Command::Add {
                name: "Bad".to_string(),
                address: "Nowhere".to_string(),
                phones: vec!["0501234567".to_string()],
                emails: vec!["not-an-email".to_string()],
                birthday: None,
            },
        );
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_uses_book_phone_rules() {
        let mut book = AddressBook::with_phone_rules(PhoneRules::digits_only());
        let result = execute(
            &mut book,
            &Command::Add {
                name: "A".to_string(),
                address: "B".to_string(),
                phones: vec!["050-1234567".to_string()],
                emails: Vec::new(),
                birthday: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_missing_is_not_an_error() {
        let mut book = AddressBook::new();
        let output = execute(
            &mut book,
            &Command::Delete {
                name: "Ghost".to_string(),
            },
        )
        .unwrap();
        assert!(!output.modified);
    }

    #[test]
    fn test_edit_phone_miss_reports_unchanged() {
        let mut book = AddressBook::new();
        add_jane(&mut book);
        let output = execute(
            &mut book,
            &Command::EditPhone {
                name: "Jane Doe".to_string(),
                old: "0000000000".to_string(),
                new: "0509999999".to_string(),
            },
        )
        .unwrap();
        assert!(!output.modified);
    }

    #[test]
    fn test_mutating_missing_record_is_not_found() {
        let mut book = AddressBook::new();
        let result = execute(
            &mut book,
            &Command::AddEmail {
                name: "Ghost".to_string(),
                email: "g@host.com".to_string(),
            },
        );
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }

    #[test]
    fn test_name_arguments_are_trimmed() {
        let mut book = AddressBook::new();
        add_jane(&mut book);
        let output = execute(
            &mut book,
            &Command::Show {
                name: " Jane Doe ".to_string(),
            },
        )
        .unwrap();
        assert!(output.lines[0].starts_with("Name: Jane Doe"));
    }

    #[test]
    fn test_edit_phone_uses_book_phone_rules() {
        let mut book = AddressBook::with_phone_rules(PhoneRules::digits_only());
        execute(
            &mut book,
            &Command::Add {
                name: "Jane".to_string(),
                address: "12 Main St".to_string(),
                phones: vec!["0501234567".to_string()],
                emails: Vec::new(),
                birthday: None,
            },
        )
        .unwrap();

        let result = execute(
            &mut book,
            &Command::EditPhone {
                name: "Jane".to_string(),
                old: "0501234567".to_string(),
                new: "+380501234567".to_string(),
            },
        );
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert_eq!(book.get("Jane").unwrap().phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn test_search_without_results() {
        let mut book = AddressBook::new();
        add_jane(&mut book);
        let output = execute(
            &mut book,
            &Command::Search {
                query: "zzz".to_string(),
            },
        )
        .unwrap();
        assert_eq!(output.lines, vec!["No matching records found.".to_string()]);
    }
}
