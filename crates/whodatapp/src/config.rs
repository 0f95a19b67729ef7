//! # Configuration
//!
//! WhoDat configuration is managed by [`confique`], which layers environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `WHODAT_DATA_FILE`
//! 2. **Config file**: the TOML file passed to [`WhoDatConfig::load`], if any.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `data/whodat.json` | JSON file holding the record store |

use crate::error::{Result, WhoDatError};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_FILE: &str = "data/whodat.json";

/// Configuration for whodat, stored in `whodat.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WhoDatConfig {
    /// Location of the record store JSON file
    #[config(env = "WHODAT_DATA_FILE", default = "data/whodat.json")]
    pub data_file: PathBuf,
}

impl Default for WhoDatConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl WhoDatConfig {
    /// Loads configuration from the environment, then `config_file`, then defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|err| WhoDatError::Config(err.to_string()))
    }
}
