//! Command-line surface.
//!
//! Every command is one-shot: load the book, run, and save only if the book
//! changed.

pub mod handlers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use handlers::{execute, run, CommandOutput};

#[derive(Parser, Debug)]
#[command(name = "addressbook")]
#[command(about = "Manage contacts, search them, and track upcoming birthdays")]
pub struct Cli {
    /// Book file (overrides ADDRESSBOOK_PATH)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all contacts
    List,
    /// Show one contact
    Show {
        name: String,
    },
    /// Add a contact, replacing any contact with the same name
    Add {
        name: String,
        #[arg(short, long)]
        address: String,
        /// Phone numbers, comma or space separated (repeatable)
        #[arg(short, long = "phone")]
        phones: Vec<String>,
        /// Email address (repeatable)
        #[arg(short, long = "email")]
        emails: Vec<String>,
        /// Birthday as YYYY-MM-DD
        #[arg(short, long)]
        birthday: Option<String>,
    },
    /// Delete a contact
    Delete {
        name: String,
    },
    /// Rename a contact
    Rename {
        name: String,
        new_name: String,
    },
    /// Replace a contact's address
    SetAddress {
        name: String,
        address: String,
    },
    /// Set a contact's birthday (YYYY-MM-DD)
    SetBirthday {
        name: String,
        birthday: String,
    },
    /// Remove a contact's birthday
    ClearBirthday {
        name: String,
    },
    /// Add one or more phone numbers, comma or space separated
    AddPhone {
        name: String,
        phones: String,
    },
    /// Replace a phone number
    EditPhone {
        name: String,
        old: String,
        new: String,
    },
    /// Remove a phone number
    DeletePhone {
        name: String,
        phone: String,
    },
    /// Add an email address
    AddEmail {
        name: String,
        email: String,
    },
    /// Replace an email address
    EditEmail {
        name: String,
        old: String,
        new: String,
    },
    /// Remove an email address
    DeleteEmail {
        name: String,
        email: String,
    },
    /// Search names, phones, and emails
    Search {
        query: String,
    },
    /// Contacts whose birthday is exactly DAYS days away
    Birthdays {
        days: u32,
        /// Include every birthday from today up to DAYS days away
        #[arg(long)]
        within: bool,
    },
}
