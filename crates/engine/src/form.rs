//! The book entry form
//!
//! Four ordered free-text fields: author, title, genre, pages. The form
//! holds exactly what was typed; coercion happens when a draft becomes a
//! book.

use serde::{Deserialize, Serialize};

use ledger_core::{BookDraft, BookField};

/// Four-field entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    fields: [String; 4],
}

impl BookForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field
    pub fn get(&self, field: BookField) -> &str {
        &self.fields[field.index()]
    }

    /// Replace the text of a field
    pub fn set(&mut self, field: BookField, text: impl Into<String>) {
        self.fields[field.index()] = text.into();
    }

    /// Fill all four fields from a draft
    pub fn fill(&mut self, draft: &BookDraft) {
        for field in BookField::ALL {
            self.set(field, draft.get(field));
        }
    }

    /// Reset every field to empty text
    pub fn clear(&mut self) {
        for text in self.fields.iter_mut() {
            text.clear();
        }
    }

    /// Whether every field is empty
    pub fn is_clear(&self) -> bool {
        self.fields.iter().all(|t| t.is_empty())
    }

    /// Current contents as a draft, leaving the form as is
    pub fn draft(&self) -> BookDraft {
        BookDraft::new(
            self.get(BookField::Author),
            self.get(BookField::Title),
            self.get(BookField::Genre),
            self.get(BookField::Pages),
        )
    }

    /// Contents as a draft, leaving every field empty
    pub fn take(&mut self) -> BookDraft {
        let draft = self.draft();
        self.clear();
        draft
    }

    /// Fields with their text, in form order
    pub fn entries(&self) -> impl Iterator<Item = (BookField, &str)> {
        BookField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
