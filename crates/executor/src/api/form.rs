//! Entry form operations.

use super::Library;
use crate::{BookDraft, BookField, Command, Error, Output, Result};

impl Library {
    // =========================================================================
    // Form Operations (4)
    // =========================================================================

    /// Replace the text of one form field.
    pub fn set_field(&mut self, field: BookField, value: impl Into<String>) -> Result<BookDraft> {
        match self.session.execute(Command::FormSet {
            field,
            value: value.into(),
        })? {
            Output::Form(draft) => Ok(draft),
            _ => Err(Error::Internal {
                reason: "Unexpected output for FormSet".into(),
            }),
        }
    }

    /// Text of one form field.
    pub fn field(&mut self, field: BookField) -> Result<String> {
        match self.session.execute(Command::FormGet { field })? {
            Output::Text(text) => Ok(text),
            _ => Err(Error::Internal {
                reason: "Unexpected output for FormGet".into(),
            }),
        }
    }

    /// All four form fields.
    pub fn form(&mut self) -> Result<BookDraft> {
        match self.session.execute(Command::FormShow)? {
            Output::Form(draft) => Ok(draft),
            _ => Err(Error::Internal {
                reason: "Unexpected output for FormShow".into(),
            }),
        }
    }

    /// Empty every form field.
    pub fn clear_form(&mut self) -> Result<()> {
        match self.session.execute(Command::FormClear)? {
            Output::Form(_) => Ok(()),
            _ => Err(Error::Internal {
                reason: "Unexpected output for FormClear".into(),
            }),
        }
    }
}
