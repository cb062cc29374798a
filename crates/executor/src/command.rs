//! Command enum defining all ledger operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};

use ledger_core::{BookField, BookId};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Form | 4 | Entry form fields |
/// | Book | 6 | Add, render, delete, edit and read books |
/// | Slot | 2 | Persisted mirror |
/// | Session | 2 | Diagnostics |
///
/// Commands that change the ledger re-render the list and return its rows.
///
/// # Example
///
/// ```ignore
/// use ledger_executor::{BookField, Command};
///
/// let cmd = Command::FormSet {
///     field: BookField::Title,
///     value: "Title One".into(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Form (4) ====================
    /// Replace the text of one form field.
    /// Returns: `Output::Form`
    FormSet { field: BookField, value: String },

    /// Read one form field.
    /// Returns: `Output::Text`
    FormGet { field: BookField },

    /// Read the whole form.
    /// Returns: `Output::Form`
    FormShow,

    /// Empty every form field.
    /// Returns: `Output::Form`
    FormClear,

    // ==================== Book (6) ====================
    /// Build a book from the form, append it, persist, clear the form
    /// and re-render.
    /// Returns: `Output::Rows`
    BookAdd,

    /// Rebuild the rendered list from the in-memory ledger.
    /// Returns: `Output::Rows`
    Render,

    /// Delete the book a row's delete control targets, persist and re-render.
    /// Returns: `Output::Rows`
    BookDelete { key: BookId },

    /// Overwrite one field of a book, persist and re-render.
    /// Returns: `Output::Rows`
    BookEdit {
        key: BookId,
        field: BookField,
        value: String,
    },

    /// Read one book.
    /// Returns: `Output::MaybeBook`
    BookGet { key: BookId },

    /// Read every book in display order.
    /// Returns: `Output::Books`
    BookList,

    // ==================== Slot (2) ====================
    /// Replace the in-memory ledger with the persisted mirror and re-render.
    /// Returns: `Output::Uint` (books loaded)
    Reload,

    /// Raw text of the persisted slot.
    /// Returns: `Output::Slot`
    Dump,

    // ==================== Session (2) ====================
    /// Session diagnostics.
    /// Returns: `Output::SessionInfo`
    Info,

    /// Liveness check.
    /// Returns: `Output::Pong`
    Ping,
}

impl Command {
    /// Whether executing this command can change the ledger or its mirror.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::BookAdd | Command::BookDelete { .. } | Command::BookEdit { .. } | Command::Reload
        )
    }

    /// Variant name, used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Command::FormSet { .. } => "FormSet",
            Command::FormGet { .. } => "FormGet",
            Command::FormShow => "FormShow",
            Command::FormClear => "FormClear",
            Command::BookAdd => "BookAdd",
            Command::Render => "Render",
            Command::BookDelete { .. } => "BookDelete",
            Command::BookEdit { .. } => "BookEdit",
            Command::BookGet { .. } => "BookGet",
            Command::BookList => "BookList",
            Command::Reload => "Reload",
            Command::Dump => "Dump",
            Command::Info => "Info",
            Command::Ping => "Ping",
        }
    }
}
