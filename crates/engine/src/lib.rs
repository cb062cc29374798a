//! Ledger engine
//!
//! This crate composes the core types and session storage into the three
//! pieces a ledger page is made of:
//! - Ledger: ordered books mirrored into storage (add, delete, edit, reload)
//! - BookForm: the four-field entry form
//! - BookList: the rendered rows, each with a delete control
//!
//! Configuration lives in [`LedgerConfig`], read from `ledger.toml`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod form;
pub mod ledger;
pub mod view;

pub use config::{LedgerConfig, CONFIG_FILE_NAME};
pub use error::{LedgerError, LedgerResult};
pub use form::BookForm;
pub use ledger::Ledger;
pub use view::{row_text, BookList, DeleteControl, Row, DELETE_GLYPH};
