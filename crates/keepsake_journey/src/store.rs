//! Key-value persistence boundary
//!
//! Progression state lives in whatever string store the host provides (a
//! browser's local/session storage, a file, a test map). Records are JSON
//! string arrays; reads are best effort and a corrupted record degrades to
//! empty rather than failing the caller.

use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store rejected the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string store the host backs with real storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`], used in tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read a JSON string-array record. Missing, unreadable or corrupted records
/// all come back empty.
pub fn read_string_list(store: &impl KeyValueStore, key: &str) -> Vec<String> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(key, %error, "record read failed; treating as empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(error) => {
            tracing::warn!(key, %error, "corrupted record; treating as empty");
            Vec::new()
        }
    }
}

/// Append `value` to a string-array record if not already present. Returns
/// whether the record changed.
pub fn append_string(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &str,
) -> Result<bool, StoreError> {
    let mut list = read_string_list(store, key);
    if list.iter().any(|existing| existing == value) {
        return Ok(false);
    }
    list.push(value.to_string());
    let json = serde_json::to_string(&list)?;
    store.set(key, &json)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_reads_empty() {
        let store = MemoryStore::new();
        assert!(read_string_list(&store, "nothing").is_empty());
    }

    #[test]
    fn corrupted_record_reads_empty() {
        let mut store = MemoryStore::new();
        store.set("bad", "{not json").unwrap();
        assert!(read_string_list(&store, "bad").is_empty());

        store.set("wrong-shape", r#"{"a": 1}"#).unwrap();
        assert!(read_string_list(&store, "wrong-shape").is_empty());
    }

    #[test]
    fn append_is_idempotent() {
        let mut store = MemoryStore::new();
        assert!(append_string(&mut store, "list", "a").unwrap());
        assert!(append_string(&mut store, "list", "b").unwrap());
        assert!(!append_string(&mut store, "list", "a").unwrap());
        assert_eq!(read_string_list(&store, "list"), vec!["a", "b"]);
    }

    #[test]
    fn records_round_trip_as_json_arrays() {
        let mut store = MemoryStore::new();
        append_string(&mut store, "list", "x").unwrap();
        assert_eq!(store.get("list").unwrap().unwrap(), r#"["x"]"#);
    }
}
