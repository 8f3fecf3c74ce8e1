//! Address book persistence.
//!
//! The codec maps books to and from the JSON document format; the file
//! layer handles atomic writes and the missing-file bootstrap case.

pub mod codec;
pub mod file;
mod store;

pub use codec::{BookDocument, RecordDocument};
pub use file::{load_book, save_book};
pub use store::{BookStore, JsonFileStore};
