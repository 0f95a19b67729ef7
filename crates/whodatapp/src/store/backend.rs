use crate::error::Result;
use crate::store::codec::{self, StoreDocument};
use crate::store::record_store::RecordStore;
use std::path::PathBuf;

/// Abstract interface for persisting a record store.
///
/// This trait handles the "where" of storage (a file on disk, a buffer in
/// memory), while [`codec`] handles the "what" (field validation and the
/// duplicate check).
pub trait StorageBackend {
    /// Load the persisted store.
    /// Returns Ok(None) if nothing has been saved yet (first run).
    /// Returns Err on malformed bytes (`Parse`), invalid data (`DataCorruption`)
    /// or I/O failure (`Io`).
    fn load(&self) -> Result<Option<RecordStore>>;

    /// Persist the whole store, replacing anything saved before.
    fn save(&self, store: &RecordStore) -> Result<()>;

    /// Where this backend keeps its data.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}

/// Parses raw JSON text and decodes it into a store.
pub fn store_from_json(text: &str) -> Result<RecordStore> {
    store_from_slice(text.as_bytes())
}

/// Parses raw file bytes and decodes them into a store.
///
/// Bytes that are not valid UTF-8 are a [`crate::error::WhoDatError::Parse`] error.
pub fn store_from_slice(bytes: &[u8]) -> Result<RecordStore> {
    let document: StoreDocument = serde_json::from_slice(bytes)?;
    codec::decode(&document)
}

/// Encodes a store as pretty-printed JSON text.
pub fn store_to_json(store: &RecordStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(&codec::encode(store))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WhoDatError;

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = store_from_json("{ \"persons\": [ ").unwrap_err();
        assert!(matches!(err, WhoDatError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let err = store_from_json("{ \"persons\": 3 }").unwrap_err();
        assert!(matches!(err, WhoDatError::Parse(_)));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let bytes = b"{ \"persons\": [ { \"name\": \"J\xffhn\" } ] }";
        let err = store_from_slice(bytes).unwrap_err();
        assert!(matches!(err, WhoDatError::Parse(_)));
    }

    #[test]
    fn test_empty_store_json() {
        let text = store_to_json(&RecordStore::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!({ "persons": [] }));
        assert!(store_from_json(&text).unwrap().is_empty());
    }
}
