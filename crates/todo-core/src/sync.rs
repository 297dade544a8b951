//! Persistence Synchronizer
//!
//! Bridges the in-memory state and a `StoragePort`:
//! - load once at startup, ignoring anything that does not parse
//! - save a full snapshot after every transition
//! - on a failed save, report it once and re-read what is persisted

use log::{debug, error, warn};

use crate::model::TodoItemsState;
use crate::storage::{StorageError, StoragePort, DEFAULT_STORAGE_KEY};

type SaveErrorHandler = Box<dyn Fn(&StorageError)>;

/// Result of a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The write failed. Carries the persisted state re-read afterwards, or
    /// `None` when nothing usable was stored.
    Failed {
        error: StorageError,
        reloaded: Option<TodoItemsState>,
    },
}

pub struct PersistenceSynchronizer<S> {
    storage: S,
    key: String,
    on_save_error: Option<SaveErrorHandler>,
}

impl<S: StoragePort> PersistenceSynchronizer<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            on_save_error: None,
        }
    }

    /// Register the callback fired when a save fails
    pub fn on_save_error(mut self, handler: impl Fn(&StorageError) + 'static) -> Self {
        self.on_save_error = Some(Box::new(handler));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted state.
    ///
    /// Returns `None` when the key is absent, unreadable, not valid state JSON,
    /// or holds duplicate ids. None of these are surfaced beyond a log line.
    pub fn load(&self) -> Option<TodoItemsState> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("[SYNC] Nothing persisted under `{}`", self.key);
                return None;
            }
            Err(e) => {
                warn!("[SYNC] Failed to read `{}`: {}", self.key, e);
                return None;
            }
        };

        let state: TodoItemsState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("[SYNC] Ignoring malformed state under `{}`: {}", self.key, e);
                return None;
            }
        };

        if let Some(id) = state.duplicate_id() {
            warn!("[SYNC] Ignoring persisted state with duplicate id `{}`", id);
            return None;
        }

        debug!("[SYNC] Loaded {} items", state.len());
        Some(state)
    }

    /// Write a full snapshot of `state`, overwriting the previous value.
    ///
    /// On failure the error handler runs exactly once and the persisted value
    /// is re-read exactly once. Neither step is retried.
    pub fn save(&self, state: &TodoItemsState) -> SaveOutcome {
        let result = serde_json::to_string(state)
            .map_err(|e| StorageError::Backend(e.to_string()))
            .and_then(|json| self.storage.set(&self.key, &json));

        match result {
            Ok(()) => {
                debug!("[SYNC] Saved {} items", state.len());
                SaveOutcome::Saved
            }
            Err(error) => {
                error!("[SYNC] Unable to save state: {}", error);
                if let Some(handler) = &self.on_save_error {
                    handler(&error);
                }
                let reloaded = self.load();
                SaveOutcome::Failed { error, reloaded }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoItem;
    use crate::storage::{MemoryStorage, StorageResult};
    use std::cell::Cell;
    use std::rc::Rc;

    fn sample_state() -> TodoItemsState {
        TodoItemsState::new(vec![
            TodoItem::new("a".into(), "Buy milk", Some("semi-skimmed".to_string())),
            TodoItem { done: true, ..TodoItem::new("b".into(), "Walk dog", None) },
        ])
    }

    /// Storage whose writes always hit the quota; counts reads.
    struct FullStorage {
        persisted: Option<String>,
        reads: Cell<usize>,
    }

    impl StoragePort for FullStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.persisted.clone())
        }

        fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::QuotaExceeded { key: key.to_string() })
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_round_trip() {
        let sync = PersistenceSynchronizer::new(MemoryStorage::new());
        assert_eq!(sync.save(&sample_state()), SaveOutcome::Saved);

        let fresh = PersistenceSynchronizer::new(sync.storage());
        assert_eq!(fresh.load(), Some(sample_state()));
    }

    #[test]
    fn test_load_absent_key() {
        let sync = PersistenceSynchronizer::new(MemoryStorage::new());
        assert_eq!(sync.load(), None);
    }

    #[test]
    fn test_load_malformed_is_swallowed() {
        let storage = MemoryStorage::new();
        storage.set(DEFAULT_STORAGE_KEY, "{\"todoItems\": [oops").unwrap();
        assert_eq!(PersistenceSynchronizer::new(&storage).load(), None);

        storage.set(DEFAULT_STORAGE_KEY, "{\"items\": []}").unwrap();
        assert_eq!(PersistenceSynchronizer::new(&storage).load(), None);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let storage = MemoryStorage::new();
        storage
            .set(
                DEFAULT_STORAGE_KEY,
                r#"{"todoItems":[{"id":"a","title":"1","done":false},{"id":"a","title":"2","done":true}]}"#,
            )
            .unwrap();
        assert_eq!(PersistenceSynchronizer::new(&storage).load(), None);
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let sync = PersistenceSynchronizer::with_key(&storage, "other");
        sync.save(&sample_state());

        assert!(storage.get("other").unwrap().is_some());
        assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_quota_failure_reports_once_and_reloads_once() {
        let persisted = serde_json::to_string(&sample_state()).unwrap();
        let storage = FullStorage { persisted: Some(persisted), reads: Cell::new(0) };
        let reported = Rc::new(Cell::new(0));
        let counter = reported.clone();

        let sync = PersistenceSynchronizer::new(storage).on_save_error(move |e| {
            assert!(e.is_quota_exceeded());
            counter.set(counter.get() + 1);
        });

        let outcome = sync.save(&TodoItemsState::default());

        assert_eq!(reported.get(), 1);
        assert_eq!(sync.storage().reads.get(), 1);
        assert_eq!(
            outcome,
            SaveOutcome::Failed {
                error: StorageError::QuotaExceeded { key: DEFAULT_STORAGE_KEY.to_string() },
                reloaded: Some(sample_state()),
            }
        );
    }

    #[test]
    fn test_quota_failure_with_nothing_persisted() {
        let storage = FullStorage { persisted: None, reads: Cell::new(0) };
        let sync = PersistenceSynchronizer::new(storage);

        let outcome = sync.save(&sample_state());
        assert!(matches!(outcome, SaveOutcome::Failed { reloaded: None, .. }));
        assert_eq!(sync.storage().reads.get(), 1);
    }
}
