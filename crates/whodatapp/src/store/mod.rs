//! # Storage Layer
//!
//! The storage layer has three parts, leaves first:
//!
//! 1. [`record_store::RecordStore`]: the in-memory collection and its
//!    uniqueness rule (no two records share a student id or an email id).
//! 2. [`codec`]: conversion between a store and the [`codec::StoreDocument`]
//!    serde tree, validating every field on the way in.
//! 3. [`backend::StorageBackend`]: reads and writes that tree as JSON bytes.
//!
//! ## Load Path
//!
//! ```text
//! bytes ──serde_json──▶ StoreDocument ──codec::decode──▶ RecordStore
//!        (Parse error)                 (DataCorruption)
//! ```
//!
//! A missing file is not an error: `load` returns `Ok(None)` and the caller
//! starts from an empty store.
//!
//! ## Save Path
//!
//! `codec::encode` then `serde_json::to_string_pretty`, written whole.
//! The file backend writes to a temporary sibling and renames it over the
//! target.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production JSON file.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//! └── whodat.json      # { "persons": [ ... ] }
//! ```

pub mod backend;
pub mod codec;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::RecordStore;
