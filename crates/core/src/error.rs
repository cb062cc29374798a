//! Error types for the ledger core
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the ledger core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Field name is not one of author, title, genre, pages
    #[error("Unknown book field: {0:?}")]
    UnknownField(String),

    /// Page count text did not coerce to a number
    #[error("Invalid page count: {0:?}")]
    InvalidPages(String),
}
