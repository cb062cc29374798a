//! Mirror: the persisted copy of the ledger
//!
//! The whole ledger lives in one storage slot as a JSON array of objects
//! with keys `id`, `author`, `title`, `genre` and `pages`. Every save is a
//! full overwrite; there is no incremental patching.
//!
//! ## Slots without ids
//!
//! Slots written before books carried ids (or edited by hand) may lack `id`
//! or repeat one. Loading assigns fresh ids to those entries, in order,
//! starting after the largest id present. Every loaded id must have a
//! successor; a slot holding `u64::MAX` (or needing a fresh id past it) is
//! rejected as a serialization error.
//!
//! A missing `pages` key loads as the invalid sentinel.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use ledger_core::{Book, BookId, Pages};

use crate::error::{Result, StorageError};
use crate::session::SessionStorage;

/// Default key of the ledger slot.
pub const DEFAULT_STORAGE_KEY: &str = "newBook";

/// Book as read from storage, before ids are settled.
#[derive(Debug, Deserialize)]
struct StoredBook {
    #[serde(default)]
    id: Option<BookId>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    genre: String,
    #[serde(default = "missing_pages")]
    pages: Pages,
}

fn missing_pages() -> Pages {
    Pages::Invalid
}

/// Handle on the storage slot holding the serialized ledger.
#[derive(Clone)]
pub struct Mirror {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl Mirror {
    /// Create a mirror over `storage` using the slot named `key`
    pub fn new(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Name of the slot
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying storage
    pub fn storage(&self) -> &Arc<dyn SessionStorage> {
        &self.storage
    }

    /// Raw slot contents, if the slot was ever written.
    pub fn raw(&self) -> Option<String> {
        self.storage.get_item(&self.key)
    }

    /// Overwrite the slot with the full serialized ledger.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        let json = serde_json::to_string(books)?;
        self.storage.set_item(&self.key, &json)?;
        debug!(target: "ledger::storage", key = %self.key, books = books.len(), "Mirror saved");
        Ok(())
    }

    /// Read the ledger back from the slot.
    ///
    /// Returns `Ok(None)` when the slot is absent, an error when it holds
    /// something that is not a book array.
    pub fn load(&self) -> Result<Option<Vec<Book>>> {
        let raw = match self.raw() {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let stored: Vec<StoredBook> = serde_json::from_str(&raw)?;
        settle_ids(stored).map(Some)
    }
}

impl std::fmt::Debug for Mirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mirror").field("key", &self.key).finish()
    }
}

fn settle_ids(stored: Vec<StoredBook>) -> Result<Vec<Book>> {
    let mut next = match stored.iter().filter_map(|b| b.id).max() {
        Some(max) => successor(max)?,
        None => BookId::default(),
    };
    let mut seen = HashSet::with_capacity(stored.len());

    stored
        .into_iter()
        .map(|b| -> Result<Book> {
            let id = match b.id {
                Some(id) if seen.insert(id) => id,
                _ => {
                    let id = next;
                    next = successor(id)?;
                    seen.insert(id);
                    id
                }
            };
            Ok(Book {
                id,
                author: b.author,
                title: b.title,
                genre: b.genre,
                pages: b.pages,
            })
        })
        .collect()
}

fn successor(id: BookId) -> Result<BookId> {
    id.next()
        .ok_or_else(|| StorageError::Serialization(format!("book id out of range: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn mirror() -> Mirror {
        Mirror::new(Arc::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY)
    }

    fn book(id: u64, title: &str) -> Book {
        Book::new(BookId::new(id), "author", title, "genre", Pages::from(100))
    }

    #[test]
    fn test_absent_slot_loads_none() {
        assert_eq!(mirror().load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let m = mirror();
        let books = vec![book(0, "one"), book(1, "two")];
        m.save(&books).unwrap();
        assert_eq!(m.load().unwrap(), Some(books));
    }

    #[test]
    fn test_save_is_full_overwrite() {
        let m = mirror();
        m.save(&[book(0, "one"), book(1, "two")]).unwrap();
        m.save(&[book(1, "two")]).unwrap();
        assert_eq!(m.load().unwrap(), Some(vec![book(1, "two")]));
    }

    #[test]
    fn test_empty_ledger_is_empty_array() {
        let m = mirror();
        m.save(&[]).unwrap();
        assert_eq!(m.raw().as_deref(), Some("[]"));
        assert_eq!(m.load().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_invalid_pages_persist_as_null() {
        let m = mirror();
        let b = Book::new(BookId::new(0), "a", "t", "g", Pages::Invalid);
        m.save(&[b.clone()]).unwrap();
        assert!(m.raw().unwrap().contains("\"pages\":null"));
        assert_eq!(m.load().unwrap(), Some(vec![b]));
    }

    #[test]
    fn test_slot_without_ids_gets_sequential_ids() {
        let m = mirror();
        m.storage()
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"author":"a","title":"t1","genre":"g","pages":10},
                    {"author":"b","title":"t2","genre":"g","pages":null}]"#,
            )
            .unwrap();
        let books = m.load().unwrap().unwrap();
        assert_eq!(books[0].id, BookId::new(0));
        assert_eq!(books[1].id, BookId::new(1));
        assert_eq!(books[1].pages, Pages::Invalid);
    }

    #[test]
    fn test_duplicate_and_missing_ids_are_reassigned() {
        let m = mirror();
        m.storage()
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":5,"author":"a","title":"t","genre":"g","pages":1},
                    {"id":5,"author":"b","title":"t","genre":"g","pages":2},
                    {"author":"c","title":"t","genre":"g","pages":3}]"#,
            )
            .unwrap();
        let ids: Vec<u64> = m
            .load()
            .unwrap()
            .unwrap()
            .iter()
            .map(|b| b.id.as_u64())
            .collect();
        assert_eq!(ids, vec![5, 6, 7]);
    }

    #[test]
    fn test_id_without_successor_is_rejected() {
        let m = mirror();
        m.storage()
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":18446744073709551615,"author":"a","title":"t","genre":"g","pages":1}]"#,
            )
            .unwrap();
        assert!(matches!(m.load(), Err(StorageError::Serialization(ref r)) if r.contains("out of range")));
    }

    #[test]
    fn test_fresh_id_past_max_is_rejected() {
        let m = mirror();
        m.storage()
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":18446744073709551614,"author":"a","title":"t","genre":"g","pages":1},
                    {"author":"b","title":"t","genre":"g","pages":2}]"#,
            )
            .unwrap();
        assert!(matches!(m.load(), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_largest_usable_id_loads() {
        let m = mirror();
        m.storage()
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":18446744073709551614,"author":"a","title":"t","genre":"g","pages":1}]"#,
            )
            .unwrap();
        let books = m.load().unwrap().unwrap();
        assert_eq!(books[0].id, BookId::new(u64::MAX - 1));
    }

    #[test]
    fn test_missing_pages_loads_as_sentinel() {
        let m = mirror();
        m.storage()
            .set_item(DEFAULT_STORAGE_KEY, r#"[{"id":0,"author":"a","title":"t","genre":"g"}]"#)
            .unwrap();
        let books = m.load().unwrap().unwrap();
        assert_eq!(books[0].pages, Pages::Invalid);
        assert_eq!(books[0].pages.to_string(), "NaN");
    }

    #[test]
    fn test_malformed_slot_is_serialization_error() {
        let m = mirror();
        m.storage().set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(m.load(), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_quota_error_propagates_from_save() {
        let m = Mirror::new(Arc::new(MemoryStorage::with_quota(16)), DEFAULT_STORAGE_KEY);
        let err = m.save(&[book(0, "one")]).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(m.raw(), None);
    }
}
