//! # WhoDat Architecture
//!
//! WhoDat is a single-user student contact registry. This crate is its core:
//! the record model, the in-memory store with its uniqueness rule, and JSON
//! persistence. Command parsing and display live in the clients that embed it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store handle and its backend                    │
//! │  - Saves after every successful mutation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / edit / clear / list over a &mut RecordStore        │
//! │  - Returns structured CmdResult, never prints               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore, codec, StorageBackend                       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Uniqueness Rule
//!
//! No two records in a store share a student id **or** an email id. Every
//! store mutation keeps this; loading a file that breaks it fails with
//! [`error::WhoDatError::DataCorruption`].
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod tags;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use error::{Result, WhoDatError};
pub use model::{Record, RecordEdit};
pub use store::RecordStore;
