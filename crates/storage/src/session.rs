//! The session storage trait
//!
//! Mirrors the shape of browser Web Storage: string keys map to string
//! values, writes may fail when a quota is exceeded, reads never fail.
//! Implementations are `Send + Sync` so a handle can be shared with tooling
//! that inspects the slot; the ledger itself uses it from one thread.

use crate::error::Result;

/// Key/value storage whose lifetime is bound to one session.
pub trait SessionStorage: Send + Sync {
    /// Value stored under `key`, or None if the key was never set.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// On error the previous value is left in place.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove_item(&self, key: &str);

    /// Remove every key.
    fn clear(&self);

    /// Number of stored keys.
    fn len(&self) -> usize;

    /// Whether no keys are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the key at `index`, in implementation order.
    fn key(&self, index: usize) -> Option<String>;

    /// Bytes currently used by keys and values.
    fn bytes_used(&self) -> usize;

    /// Quota in bytes, if one is enforced.
    fn quota(&self) -> Option<usize>;
}
