use super::backend::{store_from_json, store_to_json, StorageBackend};
use crate::error::{Result, WhoDatError};
use crate::store::record_store::RecordStore;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Keeps the serialized JSON text rather than the store itself, so loads go
/// through the same parse and validation path as the file backend.
/// Uses `RefCell` so the `StorageBackend` methods can take `&self`.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-loaded with raw JSON text, valid or not.
    pub fn with_content(text: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(text.into())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// The last saved JSON text, if any.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<RecordStore>> {
        match self.content.borrow().as_deref() {
            Some(text) => store_from_json(text).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, store: &RecordStore) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WhoDatError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        let text = store_to_json(store)?;
        *self.content.borrow_mut() = Some(text);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://whodat.json")
    }
}
