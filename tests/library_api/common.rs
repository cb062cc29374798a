//! Shared helpers for the library API tests.

#![allow(dead_code)]

use std::sync::Arc;

pub use library_ledger::*;

pub fn draft(title: &str, pages: &str) -> BookDraft {
    BookDraft::new("A. Author", title, "Fiction", pages)
}

/// Storage handle shared between a library and the test inspecting it.
pub fn shared_storage() -> Arc<dyn SessionStorage> {
    Arc::new(MemoryStorage::new())
}

pub fn open_on(storage: &Arc<dyn SessionStorage>) -> Library {
    Library::open(storage.clone(), LedgerConfig::default()).unwrap()
}

/// Books as the persisted slot holds them.
pub fn persisted(storage: &Arc<dyn SessionStorage>) -> serde_json::Value {
    let raw = storage
        .get_item(DEFAULT_STORAGE_KEY)
        .expect("slot should be present");
    serde_json::from_str(&raw).unwrap()
}

pub fn titles(library: &mut Library) -> Vec<String> {
    library
        .books()
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect()
}
