//! Library Ledger: a session-scoped book list
//!
//! A ledger page is a four-field entry form (author, title, genre, pages),
//! an ordered list of books mirrored into session storage after every
//! change, and a rendered row per book with its own delete control.
//!
//! # Quick Start
//!
//! ```ignore
//! use library_ledger::{BookDraft, Library};
//!
//! let mut library = Library::cache();
//! let key = library.add_book(BookDraft::new("A. Author", "Title One", "Fiction", "120"))?;
//! for row in library.render()? {
//!     println!("{}", row.text);
//! }
//! library.delete(key)?;
//! ```
//!
//! # Architecture
//!
//! All operations are [`Command`]s executed by a [`Session`]; [`Library`]
//! is the typed wrapper over it. Storage, the ledger engine and the core
//! types are reachable through the re-exports below.

// Re-export the public API from ledger-executor
pub use ledger_executor::*;
