//! Storage Port
//!
//! Abstract key-value storage the synchronizer persists into.
//! The browser `localStorage` adapter lives in the UI crate; `MemoryStorage`
//! backs tests and the fallback when the browser refuses storage access.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Key under which the todo state is persisted
pub const DEFAULT_STORAGE_KEY: &str = "todoListState";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend has no room left for the write
    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },
    /// The backend cannot be reached at all (disabled, sandboxed, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }
}

/// Synchronous key-value storage
pub trait StoragePort {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite `key` with `value`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: StoragePort + ?Sized> StoragePort for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<S: StoragePort + ?Sized> StoragePort for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-process storage with an optional capacity.
///
/// Capacity is counted in UTF-16 code units over keys and values, which is how
/// browsers account for `localStorage` usage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    capacity: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_units(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    /// Units currently in use
    pub fn used_units(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| entry_units(k, v))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

fn entry_units(key: &str, value: &str) -> usize {
    key.encode_utf16().count() + value.encode_utf16().count()
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(capacity) = self.capacity {
            let replaced = self
                .entries
                .borrow()
                .get(key)
                .map(|old| entry_units(key, old))
                .unwrap_or(0);
            let needed = self.used_units() - replaced + entry_units(key, value);
            if needed > capacity {
                return Err(StorageError::QuotaExceeded { key: key.to_string() });
            }
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_capacity_counts_keys_and_values() {
        let storage = MemoryStorage::with_capacity_units(10);
        storage.set("ab", "cdefgh").unwrap();
        assert_eq!(storage.used_units(), 8);

        let err = storage.set("x", "yyy").unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(storage.get("x").unwrap(), None);
    }

    #[test]
    fn test_overwrite_reuses_replaced_space() {
        let storage = MemoryStorage::with_capacity_units(10);
        storage.set("k", "123456789").unwrap();
        storage.set("k", "987654321").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("987654321"));
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("nothing").is_ok());
        assert!(storage.is_empty());
    }
}
