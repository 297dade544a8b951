//! Browser Storage
//!
//! `StoragePort` over `window.localStorage`.

use log::warn;
use todo_core::{MemoryStorage, StorageError, StoragePort, StorageResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

/// Legacy `DOMException.QUOTA_EXCEEDED_ERR`
const QUOTA_EXCEEDED_CODE: u16 = 22;

/// Typical per-origin `localStorage` limit (5 MiB of UTF-16)
const FALLBACK_CAPACITY_UNITS: usize = 5 * 1024 * 1024 / 2;

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| classify(key, &e))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }
}

/// Browser storage, or an in-memory stand-in when the browser refuses access
pub fn open_local_storage() -> Box<dyn StoragePort> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("[STORAGE] {}; todos will not survive a reload", e);
            Box::new(MemoryStorage::with_capacity_units(FALLBACK_CAPACITY_UNITS))
        }
    }
}

fn classify(key: &str, err: &JsValue) -> StorageError {
    match err.dyn_ref::<DomException>() {
        Some(ex) if is_quota_exceeded(&ex.name(), ex.code()) => StorageError::QuotaExceeded {
            key: key.to_string(),
        },
        _ => StorageError::Backend(describe(err)),
    }
}

/// Quota errors across browsers: the standard name, Firefox's legacy name, or the legacy code
fn is_quota_exceeded(name: &str, code: u16) -> bool {
    matches!(name, "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED") || code == QUOTA_EXCEEDED_CODE
}

fn describe(err: &JsValue) -> String {
    match err.dyn_ref::<DomException>() {
        Some(ex) => format!("{}: {}", ex.name(), ex.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}
