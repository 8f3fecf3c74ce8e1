use addressbook::error::{BookError, BookResult};
use addressbook::{AddressBook, BookStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book store for testing.
///
/// Keeps the "saved" book in memory and tracks method calls for verification.
/// Can be told to fail saves to exercise error propagation.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStore {
    saved: Arc<Mutex<Option<AddressBook>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a new empty MockBookStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(book);
        store
    }

    /// The book as last saved, if any.
    pub fn saved_book(&self) -> Option<AddressBook> {
        self.saved.lock().unwrap().clone()
    }

    /// Make every following `save` fail.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookStore for MockBookStore {
    fn load(&self) -> BookResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> BookResult<()> {
        self.track_call("save");
        if *self.fail_saves.lock().unwrap() {
            return Err(BookError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.saved.lock().unwrap() = Some(book.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
