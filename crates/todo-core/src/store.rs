//! Todo Store
//!
//! Owns the current state and runs each dispatch to completion:
//! reduce, persist, and on a failed save fall back to what is persisted.

use log::{debug, info};

use crate::action::TodoAction;
use crate::id::{IdGenerator, UuidIds};
use crate::model::TodoItemsState;
use crate::reducer::reduce;
use crate::storage::{StorageError, StoragePort};
use crate::sync::{PersistenceSynchronizer, SaveOutcome};

/// What happened to persistence during a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Persisted,
    /// The save failed. `resynced` is true when the persisted state replaced
    /// the in-memory one.
    SaveFailed { error: StorageError, resynced: bool },
}

impl DispatchOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, DispatchOutcome::Persisted)
    }
}

pub struct TodoStore<S, G = UuidIds> {
    state: TodoItemsState,
    sync: PersistenceSynchronizer<S>,
    ids: G,
}

impl<S: StoragePort> TodoStore<S, UuidIds> {
    pub fn new(sync: PersistenceSynchronizer<S>) -> Self {
        Self::with_ids(sync, UuidIds)
    }
}

impl<S: StoragePort, G: IdGenerator> TodoStore<S, G> {
    pub fn with_ids(sync: PersistenceSynchronizer<S>, ids: G) -> Self {
        Self {
            state: TodoItemsState::default(),
            sync,
            ids,
        }
    }

    /// Load persisted state, if any. Returns whether something was loaded.
    ///
    /// The loaded snapshot is already what storage holds, so it is not written back.
    pub fn start(&mut self) -> bool {
        match self.sync.load() {
            Some(loaded) => {
                info!("[STORE] Restored {} items", loaded.len());
                self.apply(TodoAction::LoadState(loaded));
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &TodoItemsState {
        &self.state
    }

    pub fn synchronizer(&self) -> &PersistenceSynchronizer<S> {
        &self.sync
    }

    /// Apply `action` and persist the resulting state
    pub fn dispatch(&mut self, action: TodoAction) -> DispatchOutcome {
        debug!("[STORE] dispatch {}", action.kind());
        self.apply(action);

        match self.sync.save(&self.state) {
            SaveOutcome::Saved => DispatchOutcome::Persisted,
            SaveOutcome::Failed { error, reloaded } => {
                let resynced = match reloaded {
                    Some(persisted) => {
                        info!("[STORE] Resynced to {} persisted items", persisted.len());
                        self.apply(TodoAction::LoadState(persisted));
                        true
                    }
                    None => false,
                };
                DispatchOutcome::SaveFailed { error, resynced }
            }
        }
    }

    fn apply(&mut self, action: TodoAction) {
        self.state = reduce(&self.state, action, &self.ids);
    }
}
