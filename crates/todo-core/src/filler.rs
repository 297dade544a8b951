//! Storage Filler
//!
//! Developer helpers that exhaust and then release storage capacity, so the
//! quota-exceeded path can be exercised by hand.

use log::info;

use crate::storage::StoragePort;

pub const FILLER_KEY_PREFIX: &str = "test";

/// 1 MiB worth of UTF-16 characters
pub const DEFAULT_CHUNK_CHARS: usize = 1024 * 1024 / 2;

/// Largest chunk ever materialized; bigger requests start here instead
pub const MAX_CHUNK_CHARS: usize = 64 * DEFAULT_CHUNK_CHARS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Filler keys that ended up holding data (`test1..=testN`)
    pub keys_written: usize,
    /// Filler characters stored across those keys
    pub chars_written: usize,
}

pub fn filler_key(n: usize) -> String {
    format!("{}{}", FILLER_KEY_PREFIX, n)
}

/// Grow filler values until storage refuses writes.
///
/// Each key is extended by `chunk_chars` until a write fails; the chunk is then
/// halved and filling moves on. A key only counts once it holds data, so the
/// filler keys stay contiguous for `clear_filler`. Requests above
/// `MAX_CHUNK_CHARS` start from that ceiling.
///
/// Never returns on a backend without a capacity limit.
pub fn fill_storage<S: StoragePort + ?Sized>(storage: &S, chunk_chars: usize) -> FillReport {
    let mut report = FillReport::default();
    let mut chunk = chunk_chars.min(MAX_CHUNK_CHARS);
    let mut key_number = 1;
    let mut filler = String::new();

    while chunk > 0 {
        let key = filler_key(key_number);
        let piece = "a".repeat(chunk);
        loop {
            let before = filler.len();
            filler.push_str(&piece);
            if storage.set(&key, &filler).is_err() {
                filler.truncate(before);
                break;
            }
        }
        if !filler.is_empty() {
            report.keys_written += 1;
            report.chars_written += filler.len();
            key_number += 1;
            filler.clear();
        }
        chunk /= 2;
    }

    info!(
        "[FILLER] Storage filled to maximum: {} keys, {} chars",
        report.keys_written, report.chars_written
    );
    report
}

/// Remove filler keys written by `fill_storage`. Returns how many were removed.
pub fn clear_filler<S: StoragePort + ?Sized>(storage: &S) -> usize {
    let mut removed = 0;
    for n in 1.. {
        let key = filler_key(n);
        match storage.get(&key) {
            Ok(Some(_)) => {
                if storage.remove(&key).is_err() {
                    break;
                }
                removed += 1;
            }
            _ => break,
        }
    }
    info!("[FILLER] Storage cleared: {} keys", removed);
    removed
}
