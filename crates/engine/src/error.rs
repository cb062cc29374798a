//! Engine error types

use ledger_core::BookId;
use ledger_storage::StorageError;
use thiserror::Error;

/// Result type alias for ledger operations
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// Errors raised by ledger operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No book carries this key
    #[error("No row with key {0}")]
    RowNotFound(BookId),

    /// Page count rejected because strict page validation is on
    #[error("Invalid page count: {0:?}")]
    InvalidPages(String),

    /// Every representable key has been handed out
    #[error("No book keys left to assign")]
    KeysExhausted,

    /// Rows are display-only
    #[error("Rows are display-only; editing is disabled")]
    ReadOnlyRows,

    /// Configuration could not be read, parsed or written
    #[error("Config error: {0}")]
    Config(String),

    /// Storage layer error
    #[error(transparent)]
    Storage(#[from] StorageError),
}
