//! Book operations.

use super::Library;
use crate::{Book, BookDraft, BookField, BookId, Command, Error, Output, Result, Row};

impl Library {
    // =========================================================================
    // Book Operations (6)
    // =========================================================================

    /// Submit the form: add a book built from its fields and clear it.
    ///
    /// Returns the re-rendered rows.
    pub fn submit(&mut self) -> Result<Vec<Row>> {
        self.rows_of("BookAdd", Command::BookAdd)
    }

    /// Fill the form from `draft` and submit it.
    ///
    /// Returns the key of the new book.
    pub fn add_book(&mut self, draft: BookDraft) -> Result<BookId> {
        for field in BookField::ALL {
            self.set_field(field, draft.get(field))?;
        }
        self.submit()?
            .last()
            .map(|row| row.key)
            .ok_or_else(|| Error::Internal {
                reason: "BookAdd rendered no rows".into(),
            })
    }

    /// Rebuild the rendered list.
    pub fn render(&mut self) -> Result<Vec<Row>> {
        self.rows_of("Render", Command::Render)
    }

    /// Delete the book with `key`; returns the re-rendered rows.
    pub fn delete(&mut self, key: BookId) -> Result<Vec<Row>> {
        self.rows_of("BookDelete", Command::BookDelete { key })
    }

    /// Overwrite one field of the book with `key`; returns the re-rendered rows.
    pub fn edit(&mut self, key: BookId, field: BookField, value: impl Into<String>) -> Result<Vec<Row>> {
        self.rows_of(
            "BookEdit",
            Command::BookEdit {
                key,
                field,
                value: value.into(),
            },
        )
    }

    /// The book with `key`, if any.
    pub fn book(&mut self, key: BookId) -> Result<Option<Book>> {
        match self.session.execute(Command::BookGet { key })? {
            Output::MaybeBook(book) => Ok(book),
            _ => Err(Error::Internal {
                reason: "Unexpected output for BookGet".into(),
            }),
        }
    }

    /// Every book in display order.
    pub fn books(&mut self) -> Result<Vec<Book>> {
        match self.session.execute(Command::BookList)? {
            Output::Books(books) => Ok(books),
            _ => Err(Error::Internal {
                reason: "Unexpected output for BookList".into(),
            }),
        }
    }

    fn rows_of(&mut self, name: &str, cmd: Command) -> Result<Vec<Row>> {
        match self.session.execute(cmd)? {
            Output::Rows(rows) => Ok(rows),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}
