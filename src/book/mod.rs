//! The address book collection and its query operations.

mod address_book;

pub use address_book::AddressBook;
