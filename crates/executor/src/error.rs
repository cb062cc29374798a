//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: No error information is lost in conversion from internal errors

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Not Found | `RowNotFound` | No book carries the key |
/// | Validation | `UnknownField`, `InvalidPages` | Bad input |
/// | State | `KeysExhausted`, `ReadOnlyRows` | No key left, or edits are disabled |
/// | Storage | `QuotaExceeded`, `Serialization` | Session storage refused or holds garbage |
/// | System | `Config`, `Internal` | Setup errors and invariant violations |
///
/// # Example
///
/// ```ignore
/// use ledger_executor::{Command, Error, Session};
///
/// match session.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::RowNotFound { key }) => {
///         println!("No row with key {}", key);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// No book carries this key
    #[error("row not found: {key}")]
    RowNotFound { key: u64 },

    // ==================== Validation Errors ====================
    /// Field name is not author, title, genre or pages
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// Page count rejected under strict validation
    #[error("invalid page count: {input:?}")]
    InvalidPages { input: String },

    // ==================== State Errors ====================
    /// No book key is left to assign
    #[error("book keys exhausted")]
    KeysExhausted,

    /// Rows are display-only
    #[error("rows are display-only")]
    ReadOnlyRows,

    // ==================== Storage Errors ====================
    /// Session storage quota exceeded; nothing was changed
    #[error("storage quota exceeded: needs {needed} bytes, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Persisted slot could not be (de)serialized
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    // ==================== System Errors ====================
    /// Configuration error
    #[error("config error: {reason}")]
    Config { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}
