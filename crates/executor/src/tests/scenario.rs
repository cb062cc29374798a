//! End-to-end scenarios through the typed facade.

use std::io::Write;
use std::sync::Arc;

use crate::{BookDraft, BookField, Error, LedgerConfig, Library, MemoryStorage, Pages, SessionStorage, DELETE_GLYPH};

fn draft(title: &str, pages: &str) -> BookDraft {
    BookDraft::new("A. Author", title, "Fiction", pages)
}

#[test]
fn test_two_adds_then_delete_first_without_render() {
    let mut library = Library::cache();
    let first = library.add_book(draft("Title One", "120")).unwrap();
    let second = library.add_book(draft("Title Two", "88")).unwrap();

    let rows = library.delete(first).unwrap();

    let books = library.books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Title Two");

    // The surviving row keeps its own key and moves to position 0
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, second);
    assert_eq!(rows[0].position, 0);
    assert_eq!(rows[0].delete.target, second);

    // A second delete through the surviving row's control hits the right book
    let rows = library.delete(rows[0].delete.target).unwrap();
    assert!(rows.is_empty());
    assert!(library.books().unwrap().is_empty());
}

#[test]
fn test_delete_middle_preserves_order() {
    let mut library = Library::cache();
    let keys: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|t| library.add_book(draft(t, "1")).unwrap())
        .collect();

    let rows = library.delete(keys[1]).unwrap();
    let titles: Vec<String> = library.books().unwrap().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["a", "c", "d"]);
    assert_eq!(
        rows.iter().map(|r| r.key).collect::<Vec<_>>(),
        vec![keys[0], keys[2], keys[3]]
    );
    assert!(rows.iter().enumerate().all(|(i, r)| r.position == i));

    let dumped = library.dump().unwrap().unwrap();
    assert_eq!(dumped.matches("\"title\"").count(), 3);
}

#[test]
fn test_non_numeric_pages_scenario() {
    let mut library = Library::cache();
    let key = library.add_book(draft("Title One", "abc")).unwrap();

    let book = library.book(key).unwrap().unwrap();
    assert_eq!(book.pages, Pages::Invalid);

    let rows = library.render().unwrap();
    assert!(rows[0].text.ends_with("PAGES: NaN"));
    assert_eq!(rows[0].delete.label, DELETE_GLYPH);
    assert!(library.dump().unwrap().unwrap().contains("\"pages\":null"));
}

#[test]
fn test_submit_reads_form() {
    let mut library = Library::cache();
    library.set_field(BookField::Author, "A. Author").unwrap();
    library.set_field(BookField::Pages, " 0x10 ").unwrap();
    assert_eq!(library.field(BookField::Pages).unwrap(), " 0x10 ");

    let rows = library.submit().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].text.ends_with("PAGES: 16"));
    assert_eq!(library.form().unwrap(), BookDraft::default());
}

#[test]
fn test_session_survives_reopen_on_shared_storage() {
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let mut library = Library::open(storage.clone(), LedgerConfig::default()).unwrap();
    library.add_book(draft("Title One", "120")).unwrap();
    let kept = library.add_book(draft("Title Two", "88")).unwrap();

    let mut reopened = Library::open(storage, LedgerConfig::default()).unwrap();
    let rows = reopened.render().unwrap();
    assert_eq!(rows.len(), 2);

    // Keys continue past what the slot already holds
    let next = reopened.add_book(draft("Title Three", "1")).unwrap();
    assert!(next > kept);
}

#[test]
fn test_reload_picks_up_external_write() {
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let mut library = Library::open(storage.clone(), LedgerConfig::default()).unwrap();
    library.add_book(draft("Title One", "120")).unwrap();

    storage
        .set_item("newBook", r#"[{"author":"x","title":"y","genre":"z","pages":12}]"#)
        .unwrap();
    // Render reads memory, so nothing changed yet
    assert_eq!(library.render().unwrap()[0].text.lines().nth(1), Some("TITLE: Title One"));

    assert_eq!(library.reload().unwrap(), 1);
    let rows = library.render().unwrap();
    assert_eq!(rows[0].text, "AUTHOR: x\nTITLE: y\nGENRE: z\nPAGES: 12");
}

#[test]
fn test_reload_of_malformed_slot_keeps_state() {
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let mut library = Library::open(storage.clone(), LedgerConfig::default()).unwrap();
    library.add_book(draft("Title One", "120")).unwrap();

    storage.set_item("newBook", "[{").unwrap();
    let err = library.reload().unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
    assert_eq!(library.books().unwrap().len(), 1);
}

#[test]
fn test_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "storage_key = \"shelf\"\nstrict_pages = true").unwrap();

    let mut library = Library::from_config_file(file.path()).unwrap();
    let info = library.info().unwrap();
    assert_eq!(info.storage_key, "shelf");
    assert!(info.strict_pages);

    let err = library.add_book(draft("Title One", "many")).unwrap_err();
    assert_eq!(err, Error::InvalidPages { input: "many".into() });
}

#[test]
fn test_ping_reports_version() {
    let mut library = Library::cache();
    assert_eq!(library.ping().unwrap(), env!("CARGO_PKG_VERSION"));
}
