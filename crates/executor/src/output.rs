//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. The same command always
//! produces the same output variant; only the values depend on session state.

use serde::{Deserialize, Serialize};

use ledger_core::{Book, BookDraft};
use ledger_engine::Row;

use crate::types::SessionInfo;

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// use ledger_executor::{Command, Output, Session};
///
/// match session.execute(Command::BookGet { key })? {
///     Output::MaybeBook(Some(book)) => println!("{}", book.title),
///     Output::MaybeBook(None) => println!("No such book"),
///     _ => unreachable!("BookGet always returns MaybeBook"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    // ==================== Form ====================
    /// All four form fields
    Form(BookDraft),

    /// One form field
    Text(String),

    // ==================== Books ====================
    /// The rendered list after the command ran
    Rows(Vec<Row>),

    /// A book that may not exist
    MaybeBook(Option<Book>),

    /// Books in display order
    Books(Vec<Book>),

    /// Unsigned integer result (for count operations)
    Uint(u64),

    // ==================== Slot ====================
    /// Raw persisted slot, `None` when absent
    Slot(Option<String>),

    // ==================== Session ====================
    /// Session diagnostics
    SessionInfo(SessionInfo),

    /// Ping response
    Pong {
        /// Crate version
        version: String,
    },
}
