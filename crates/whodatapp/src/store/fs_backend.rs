use super::backend::{store_from_slice, store_to_json, StorageBackend};
use crate::error::{Result, WhoDatError};
use crate::store::record_store::RecordStore;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file backend.
///
/// Single writer, single process: the file is read whole and written whole,
/// with no locking against outside modification.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Reads the store kept at `path`. A missing file yields `Ok(None)`.
    pub fn load_from(&self, path: &Path) -> Result<Option<RecordStore>> {
        debug!("event=store_load status=start path={}", path.display());
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load status=absent path={}", path.display());
                return Ok(None);
            }
            Err(err) => return Err(WhoDatError::Io(err)),
        };
        let store = store_from_slice(&content)?;
        debug!(
            "event=store_load status=ok path={} records={}",
            path.display(),
            store.len()
        );
        Ok(Some(store))
    }

    /// Writes `store` to `path`, creating parent directories as needed.
    pub fn save_to(&self, store: &RecordStore, path: &Path) -> Result<()> {
        debug!(
            "event=store_save status=start path={} records={}",
            path.display(),
            store.len()
        );
        let content = store_to_json(store)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_dir(&dir)?;

        // Atomic write
        let tmp_file = dir.join(format!(".whodat-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(WhoDatError::Io)?;
        if let Err(err) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(WhoDatError::Io(err));
        }

        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(WhoDatError::Io)?;
    }
    Ok(())
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<RecordStore>> {
        self.load_from(&self.data_file)
    }

    fn save(&self, store: &RecordStore) -> Result<()> {
        self.save_to(store, &self.data_file)
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
