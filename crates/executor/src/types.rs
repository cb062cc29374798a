//! Types carried by command outputs.

use serde::{Deserialize, Serialize};

/// Session diagnostics returned by `Command::Info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Session id, fixed for the session's lifetime
    pub session_id: String,
    /// Crate version
    pub version: String,
    /// Books in the ledger
    pub books: usize,
    /// Key the next added book will receive
    pub next_key: u64,
    /// Storage slot the ledger is mirrored into
    pub storage_key: String,
    /// Bytes the storage currently holds
    pub bytes_used: usize,
    /// Storage quota, `None` when unbounded
    pub quota_bytes: Option<usize>,
    /// Whether rows accept edits
    pub editable_rows: bool,
    /// Whether invalid page counts are rejected
    pub strict_pages: bool,
}
