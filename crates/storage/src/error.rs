//! Storage error types

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors raised by session storage and the ledger mirror
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A write would push the storage past its quota
    #[error("Quota exceeded: write needs {needed} bytes, quota is {quota}")]
    QuotaExceeded {
        /// Bytes the storage would hold after the write
        needed: usize,
        /// Configured quota in bytes
        quota: usize,
    },

    /// The persisted slot could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}
