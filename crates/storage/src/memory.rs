//! MemoryStorage: in-process session storage
//!
//! Uses:
//! - `BTreeMap<String, String>` so `key(index)` is stable between calls
//! - `parking_lot::RwLock` for shared access through `&self`
//!
//! Sizes are counted the way browsers account session storage: two bytes
//! per UTF-16 code unit, over both keys and values. The default quota is
//! 5 MiB.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::{Result, StorageError};
use crate::session::SessionStorage;

/// Default quota: 5 MiB.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// In-memory session storage with an optional byte quota.
///
/// Contents are dropped with the storage: nothing outlives the session.
#[derive(Debug)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create storage with the default quota
    pub fn new() -> Self {
        Self::with_quota(DEFAULT_QUOTA_BYTES)
    }

    /// Create storage with a quota of `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            quota: Some(bytes),
        }
    }

    /// Create storage without a quota
    pub fn unbounded() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            quota: None,
        }
    }

    fn entry_size(key: &str, value: &str) -> usize {
        (key.encode_utf16().count() + value.encode_utf16().count()) * 2
    }

    fn usage(entries: &BTreeMap<String, String>) -> usize {
        entries
            .iter()
            .map(|(k, v)| Self::entry_size(k, v))
            .sum()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();

        if let Some(quota) = self.quota {
            let current = Self::usage(&entries);
            let replaced = entries
                .get(key)
                .map(|old| Self::entry_size(key, old))
                .unwrap_or(0);
            let needed = current - replaced + Self::entry_size(key, value);
            if needed > quota {
                warn!(target: "ledger::storage", key, needed, quota, "Write rejected by quota");
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        debug!(target: "ledger::storage", key, len = value.len(), "Slot written");
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn clear(&self) {
        self.entries.write().clear();
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn key(&self, index: usize) -> Option<String> {
        self.entries.read().keys().nth(index).cloned()
    }

    fn bytes_used(&self) -> usize {
        Self::usage(&self.entries.read())
    }

    fn quota(&self) -> Option<usize> {
        self.quota
    }
}
