//! UI State Store
//!
//! Uses Leptos reactive_stores for the presentation-only flags.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::StorageError;

/// Presentation state that is never persisted
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// A save failed and the error toast is showing
    pub save_failed: bool,
    /// Last save error, for the toast's tooltip
    pub last_save_error: Option<String>,
    /// Bumped on every failure; the auto-hide timer only closes its own toast
    pub save_error_seq: u32,
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show the save-error toast
pub fn store_report_save_error(store: &UiStore, error: &StorageError) {
    store.last_save_error().set(Some(error.to_string()));
    *store.save_error_seq().write() += 1;
    store.save_failed().set(true);
}

pub fn store_dismiss_save_error(store: &UiStore) {
    store.save_failed().set(false);
}

/// Dismiss only if no newer failure was reported since `seq`
pub fn store_expire_save_error(store: &UiStore, seq: u32) {
    if store.save_error_seq().get_untracked() == seq {
        store_dismiss_save_error(store);
    }
}

pub fn store_save_failed(store: &UiStore) -> bool {
    store.save_failed().get()
}

pub fn store_save_error_seq(store: &UiStore) -> u32 {
    store.save_error_seq().get_untracked()
}

pub fn store_last_save_error(store: &UiStore) -> Option<String> {
    store.last_save_error().get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota_error() -> StorageError {
        StorageError::QuotaExceeded { key: "todoListState".to_string() }
    }

    #[test]
    fn test_stale_timer_keeps_newer_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let ui: UiStore = Store::new(UiState::default());

            store_report_save_error(&ui, &quota_error());
            let first = store_save_error_seq(&ui);
            store_report_save_error(&ui, &quota_error());
            let second = store_save_error_seq(&ui);
            assert_ne!(first, second);

            // The first failure's timer fires while the second toast is up
            store_expire_save_error(&ui, first);
            assert!(ui.save_failed().get_untracked());

            store_expire_save_error(&ui, second);
            assert!(!ui.save_failed().get_untracked());
        });
    }

    #[test]
    fn test_dismiss_and_last_error() {
        let owner = Owner::new();
        owner.with(|| {
            let ui: UiStore = Store::new(UiState::default());
            store_report_save_error(&ui, &quota_error());
            assert_eq!(ui.last_save_error().get_untracked(), Some(quota_error().to_string()));

            store_dismiss_save_error(&ui);
            assert!(!ui.save_failed().get_untracked());
        });
    }
}
