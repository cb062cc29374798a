//! Command execution layer for the library ledger
//!
//! Every operation on a ledger page is a [`Command`] executed by a
//! [`Session`], producing exactly one [`Output`] or an [`Error`]. All three
//! are serializable, so the same command set drives the typed [`Library`]
//! facade, the `ledger` CLI and JSON clients alike.
//!
//! # Example
//!
//! ```ignore
//! use ledger_executor::{BookDraft, Library};
//!
//! let mut library = Library::cache();
//! let key = library.add_book(BookDraft::new("A. Author", "Title One", "Fiction", "120"))?;
//! let rows = library.delete(key)?;
//! assert!(rows.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
mod convert;
mod error;
mod handlers;
mod output;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use api::Library;
pub use command::Command;
pub use error::Error;
pub use output::Output;
pub use session::Session;
pub use types::SessionInfo;

pub use ledger_core::{Book, BookDraft, BookField, BookId, Pages};
pub use ledger_engine::{row_text, DeleteControl, LedgerConfig, Row, CONFIG_FILE_NAME, DELETE_GLYPH};
pub use ledger_storage::{MemoryStorage, SessionStorage, DEFAULT_STORAGE_KEY};

/// Result type for command execution
pub type Result<T> = std::result::Result<T, Error>;
