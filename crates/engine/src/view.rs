//! Rendered output: one row per book
//!
//! [`BookList`] is the output region. [`BookList::render`] throws the
//! previous rows away and rebuilds them from the ledger, so rendering twice
//! without a mutation in between yields identical rows.
//!
//! Each [`Row`] pairs a labelled text block with a [`DeleteControl`]. The
//! control carries the key of its own row, so resolving which book a click
//! targets does not depend on where the row sits in the list.

use serde::{Deserialize, Serialize};

use ledger_core::{Book, BookField, BookId};

use crate::ledger::Ledger;

/// Label of the delete control.
pub const DELETE_GLYPH: &str = "\u{1F5D1}";

/// The trash control rendered next to each row's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteControl {
    /// Key of the row this control deletes
    pub target: BookId,
    /// Visible label
    pub label: String,
}

/// One rendered book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Lookup key: the book's stable id
    pub key: BookId,
    /// 0-based position in the ledger at render time
    pub position: usize,
    /// Labelled text block
    pub text: String,
    /// Whether the text block accepts edits
    pub editable: bool,
    /// The row's delete control
    pub delete: DeleteControl,
}

impl Row {
    fn for_book(book: &Book, position: usize, editable: bool) -> Self {
        Self {
            key: book.id,
            position,
            text: row_text(book),
            editable,
            delete: DeleteControl {
                target: book.id,
                label: DELETE_GLYPH.to_string(),
            },
        }
    }
}

/// Text block of a row: one `LABEL: value` line per field.
pub fn row_text(book: &Book) -> String {
    BookField::ALL
        .iter()
        .map(|f| format!("{}: {}", f.label(), book.field_text(*f)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The output region holding the rendered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookList {
    rows: Vec<Row>,
}

impl BookList {
    /// Create an empty output region
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with a fresh rendering of `ledger`.
    pub fn render(&mut self, ledger: &Ledger) {
        let editable = ledger.config().editable_rows;
        self.rows.clear();
        self.rows.extend(
            ledger
                .books()
                .iter()
                .enumerate()
                .map(|(pos, book)| Row::for_book(book, pos, editable)),
        );
    }

    /// Rendered rows in display order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rendered rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing is rendered
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row carrying `key`
    pub fn row(&self, key: BookId) -> Option<&Row> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Row at `position`
    pub fn row_at(&self, position: usize) -> Option<&Row> {
        self.rows.get(position)
    }

    /// Key targeted by the delete control of the row at `position`.
    pub fn delete_target_at(&self, position: usize) -> Option<BookId> {
        self.rows.get(position).map(|r| r.delete.target)
    }
}
