//! App Configuration
//!
//! Defaults for persistence, notifications and logging, provided via context.

use log::LevelFilter;
use todo_core::DEFAULT_STORAGE_KEY;

/// Shown when a save hits the storage quota
pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "Unable to save todos: browser storage quota exceeded. Please delete some old items.";

/// Error toast lifetime
pub const TOAST_AUTO_HIDE_MS: u32 = 6_000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// `localStorage` key holding the `{ todoItems }` snapshot
    pub storage_key: String,
    pub toast_auto_hide_ms: u32,
    pub save_error_message: String,
    pub log_level: LevelFilter,
    /// Expose `fillLocalStorage` & co. on `window`
    pub dev_tools: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_auto_hide_ms: TOAST_AUTO_HIDE_MS,
            save_error_message: QUOTA_EXCEEDED_MESSAGE.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            dev_tools: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "todoListState");
        assert_eq!(config.toast_auto_hide_ms, 6000);
        assert!(config.save_error_message.contains("quota exceeded"));
    }
}
