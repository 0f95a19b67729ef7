//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for UI clients (a command parser, a GUI), none of which are part
//! of this crate.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** the [`RecordStore`] handle and the [`StorageBackend`] it persists to
//! - **Dispatches** to the appropriate command function
//! - **Persists** the whole store after every successful mutation
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business logic stays in `commands/*.rs` and the store; the facade holds no
//! state besides the two handles.
//!
//! ## Opening
//!
//! [`WhoDatApi::open`] loads the backend. An absent data file yields an empty
//! store. Parse and corruption errors are returned as-is; a caller that wants
//! to continue anyway can use [`WhoDatApi::open_empty`].
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `WhoDatApi<FsBackend>`
//! - Testing: `WhoDatApi<MemBackend>`

use crate::commands::{self, list::RecordFilter, CmdResult};
use crate::config::WhoDatConfig;
use crate::error::Result;
use crate::model::{Record, RecordEdit, StudentId};
use crate::store::fs_backend::FsBackend;
use crate::store::{RecordStore, StorageBackend};
use log::{debug, info, warn};

pub struct WhoDatApi<B: StorageBackend> {
    backend: B,
    store: RecordStore,
}

impl<B: StorageBackend> WhoDatApi<B> {
    /// Loads the persisted store, starting empty if nothing was saved yet.
    pub fn open(backend: B) -> Result<Self> {
        let store = match backend.load()? {
            Some(store) => store,
            None => {
                info!(
                    "event=api_open status=empty location={}",
                    backend.location().display()
                );
                RecordStore::new()
            }
        };
        Ok(Self { backend, store })
    }

    /// Starts from an empty store without reading the backend.
    ///
    /// The next mutation overwrites whatever the backend held.
    pub fn open_empty(backend: B) -> Self {
        warn!(
            "event=api_open status=reset location={}",
            backend.location().display()
        );
        Self {
            backend,
            store: RecordStore::new(),
        }
    }

    pub fn add_record(&mut self, record: Record) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, record)?;
        debug!("event=api_add records={}", self.store.len());
        self.save()?;
        Ok(result)
    }

    pub fn edit_record(
        &mut self,
        student_id: &StudentId,
        edit: &RecordEdit,
    ) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.store, student_id, edit)?;
        debug!("event=api_edit student_id={}", student_id);
        self.save()?;
        Ok(result)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        let result = commands::clear::run(&mut self.store)?;
        debug!("event=api_clear");
        self.save()?;
        Ok(result)
    }

    pub fn list_records(&self, filter: &RecordFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn contains(&self, candidate: &Record) -> bool {
        self.store.contains(candidate)
    }

    pub fn find(&self, student_id: &StudentId) -> Option<&Record> {
        self.store.find_by_student_id(student_id)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Writes the current store to the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save(&self.store)
    }
}

impl WhoDatApi<FsBackend> {
    /// Opens the JSON file named by `config.data_file`.
    pub fn from_config(config: &WhoDatConfig) -> Result<Self> {
        Self::open(FsBackend::new(config.data_file.clone()))
    }
}
