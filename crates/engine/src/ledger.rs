//! Ledger: the ordered book collection and its persisted mirror
//!
//! ## Invariants
//!
//! 1. **Insertion order is display order.**
//! 2. **Mirror agreement**: after every `add`, `delete` and `edit` returns,
//!    the mirror slot deserializes to exactly `books()`. A failed write
//!    rolls the in-memory change back.
//! 3. **Stable keys**: books are addressed by [`BookId`], never by position,
//!    and ids are never reused within one ledger.
//!
//! ## Reload
//!
//! The in-memory collection is authoritative between mutations. [`Ledger::reload`]
//! is the only operation that reads the mirror back, and runs once when the
//! ledger is opened.

use std::sync::Arc;

use tracing::{debug, info, warn};

use ledger_core::{Book, BookDraft, BookField, BookId, Pages};
use ledger_storage::{Mirror, SessionStorage};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};

/// Ordered book collection mirrored into session storage.
#[derive(Debug)]
pub struct Ledger {
    books: Vec<Book>,
    next_id: BookId,
    mirror: Mirror,
    config: LedgerConfig,
}

impl Ledger {
    /// Open a ledger over `storage`, loading whatever the slot holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the slot is malformed.
    pub fn open(storage: Arc<dyn SessionStorage>, config: LedgerConfig) -> LedgerResult<Self> {
        config.validate()?;
        let mirror = Mirror::new(storage, config.storage_key.clone());
        let mut ledger = Self {
            books: Vec::new(),
            next_id: BookId::default(),
            mirror,
            config,
        };
        ledger.reload()?;
        Ok(ledger)
    }

    /// Open a ledger on fresh storage built from `config`.
    pub fn with_config(config: LedgerConfig) -> LedgerResult<Self> {
        let storage = config.open_storage();
        Self::open(storage, config)
    }

    /// Open an empty ledger on fresh default storage.
    pub fn cache() -> Self {
        let config = LedgerConfig::default();
        Self {
            books: Vec::new(),
            next_id: BookId::default(),
            mirror: Mirror::new(config.open_storage(), config.storage_key.clone()),
            config,
        }
    }

    /// Books in display order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the ledger holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Book with this key
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Current position of the book with this key
    pub fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Id the next added book will receive
    pub fn next_id(&self) -> BookId {
        self.next_id
    }

    /// The persisted mirror
    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    /// Active configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Append a book built from `draft` and persist.
    ///
    /// # Errors
    ///
    /// `InvalidPages` when strict page validation rejects the draft;
    /// `KeysExhausted` when no id is left after this one; `Storage` when
    /// the mirror write fails (nothing is appended).
    pub fn add(&mut self, draft: BookDraft) -> LedgerResult<&Book> {
        let pages = self.checked_pages(&draft.pages)?;
        let id = self.next_id;
        let after = id.next().ok_or(LedgerError::KeysExhausted)?;
        let mut book = draft.into_book(id);
        book.pages = pages;
        self.books.push(book);

        if let Err(e) = self.persist() {
            self.books.pop();
            return Err(e);
        }
        self.next_id = after;
        debug!(target: "ledger::engine", id = %id, len = self.books.len(), "Book added");

        let last = self.books.len() - 1;
        Ok(&self.books[last])
    }

    /// Remove the book with key `id` and persist.
    ///
    /// # Errors
    ///
    /// `RowNotFound` for an unknown key; `Storage` when the mirror write
    /// fails (the book stays in place).
    pub fn delete(&mut self, id: BookId) -> LedgerResult<Book> {
        let pos = self.position(id).ok_or(LedgerError::RowNotFound(id))?;
        let removed = self.books.remove(pos);

        if let Err(e) = self.persist() {
            self.books.insert(pos, removed);
            return Err(e);
        }
        debug!(target: "ledger::engine", id = %id, position = pos, "Book deleted");
        Ok(removed)
    }

    /// Overwrite one field of the book with key `id` and persist.
    ///
    /// # Errors
    ///
    /// `ReadOnlyRows` when editing is disabled, `RowNotFound` for an unknown
    /// key, `InvalidPages` under strict validation, `Storage` when the
    /// mirror write fails (the book keeps its previous value).
    pub fn edit(&mut self, id: BookId, field: BookField, text: &str) -> LedgerResult<&Book> {
        if !self.config.editable_rows {
            return Err(LedgerError::ReadOnlyRows);
        }
        let pos = self.position(id).ok_or(LedgerError::RowNotFound(id))?;
        if field == BookField::Pages {
            self.checked_pages(text)?;
        }

        let previous = self.books[pos].clone();
        self.books[pos].set_field(field, text);

        if let Err(e) = self.persist() {
            self.books[pos] = previous;
            return Err(e);
        }
        debug!(target: "ledger::engine", id = %id, field = %field, "Book edited");
        Ok(&self.books[pos])
    }

    /// Replace the in-memory books with the mirror's contents.
    ///
    /// An absent slot reloads as an empty ledger. Returns the number of
    /// books loaded.
    ///
    /// # Errors
    ///
    /// `Storage` when the slot is malformed; the ledger is left unchanged.
    pub fn reload(&mut self) -> LedgerResult<usize> {
        let books = match self.mirror.load() {
            Ok(books) => books.unwrap_or_default(),
            Err(e) => {
                warn!(target: "ledger::engine", key = %self.mirror.key(), error = %e, "Reload failed");
                return Err(e.into());
            }
        };

        let after_loaded = books
            .iter()
            .filter_map(|b| b.id.next())
            .max()
            .unwrap_or_default();
        self.next_id = self.next_id.max(after_loaded);
        self.books = books;

        info!(target: "ledger::engine", key = %self.mirror.key(), books = self.books.len(), "Ledger reloaded");
        Ok(self.books.len())
    }

    fn checked_pages(&self, text: &str) -> LedgerResult<Pages> {
        let pages = Pages::coerce(text);
        if self.config.strict_pages && !pages.is_valid() {
            return Err(LedgerError::InvalidPages(text.to_string()));
        }
        Ok(pages)
    }

    fn persist(&self) -> LedgerResult<()> {
        self.mirror.save(&self.books).map_err(|e| {
            warn!(target: "ledger::engine", error = %e, "Mirror write failed; change rolled back");
            LedgerError::from(e)
        })
    }
}
