//! Todo Context
//!
//! The dispatch handle shared with every component via the Leptos Context API.

use leptos::prelude::*;
use todo_core::{
    DispatchOutcome, StoragePort, TodoAction, TodoItem, TodoItemId, TodoItemsState, TodoStore,
};

pub type AppTodoStore = TodoStore<Box<dyn StoragePort>>;

#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Snapshot of the store's state after the last dispatch
    pub state: ReadSignal<TodoItemsState>,
    set_state: WriteSignal<TodoItemsState>,
    /// Browser storage handles are not `Send`, so the store stays thread-local
    store: StoredValue<AppTodoStore, LocalStorage>,
}

impl TodoContext {
    pub fn new(store: AppTodoStore) -> Self {
        let (state, set_state) = signal(store.state().clone());
        Self {
            state,
            set_state,
            store: StoredValue::new_local(store),
        }
    }

    /// Run `action` through the reducer and persist the result, then publish
    /// the new state to the view.
    pub fn dispatch(&self, action: TodoAction) {
        let next = self.store.try_update_value(|store| {
            if let DispatchOutcome::SaveFailed { error, resynced } = store.dispatch(action) {
                log::warn!("[STORE] Save failed ({}), resynced from storage: {}", error, resynced);
            }
            store.state().clone()
        });
        match next {
            Some(next) => self.set_state.set(next),
            None => log::error!("[STORE] Dispatch after the todo store was disposed"),
        }
    }

    /// Items in display order (tracked)
    pub fn items(&self) -> Vec<TodoItem> {
        self.state.get().todo_items
    }

    /// Current position of `id` in display order (tracked)
    pub fn position_of(&self, id: &TodoItemId) -> Option<usize> {
        self.state
            .with(|state| state.todo_items.iter().position(|item| &item.id == id))
    }

    /// Current value of the item with `id` (tracked)
    pub fn item(&self, id: &TodoItemId) -> Option<TodoItem> {
        self.state
            .with(|state| state.todo_items.iter().find(|item| &item.id == id).cloned())
    }

    /// Run `f` against the store's storage backend
    pub fn with_storage<R>(&self, f: impl FnOnce(&dyn StoragePort) -> R) -> Option<R> {
        self.store
            .try_with_value(|store| f(&**store.synchronizer().storage()))
    }
}

/// Get the todo context; panics outside of `App`
pub fn use_todo_items() -> TodoContext {
    expect_context::<TodoContext>()
}
