//! Observable ledger properties: render, add, delete and the form.

use crate::common::*;

#[test]
fn render_is_idempotent() {
    let mut library = Library::cache();
    library.add_book(draft("a", "1")).unwrap();
    library.add_book(draft("b", "2")).unwrap();
    let first = library.render().unwrap();
    let second = library.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn rows_match_ledger_length_and_order() {
    let mut library = Library::cache();
    for t in ["a", "b", "c"] {
        library.add_book(draft(t, "1")).unwrap();
    }
    let rows = library.render().unwrap();
    let books = library.books().unwrap();
    assert_eq!(rows.len(), books.len());
    for (i, (row, book)) in rows.iter().zip(&books).enumerate() {
        assert_eq!(row.position, i);
        assert_eq!(row.key, book.id);
        assert_eq!(row.text, row_text(book));
    }
}

#[test]
fn add_persists_numeric_pages() {
    let storage = shared_storage();
    let mut library = open_on(&storage);
    library.add_book(draft("Title One", "120")).unwrap();

    let slot = persisted(&storage);
    assert_eq!(slot[0]["title"], "Title One");
    assert_eq!(slot[0]["pages"], 120);
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let storage = shared_storage();
    let mut library = open_on(&storage);
    let keys: Vec<BookId> = ["a", "b", "c"]
        .iter()
        .map(|t| library.add_book(draft(t, "1")).unwrap())
        .collect();

    library.delete(keys[0]).unwrap();
    assert_eq!(titles(&mut library), vec!["b", "c"]);

    let slot = persisted(&storage);
    let persisted_titles: Vec<&str> = slot
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(persisted_titles, vec!["b", "c"]);
}

#[test]
fn delete_of_unknown_key_changes_nothing() {
    let mut library = Library::cache();
    library.add_book(draft("a", "1")).unwrap();
    let before = library.dump().unwrap();

    let err = library.delete(BookId::new(99)).unwrap_err();
    assert_eq!(err, Error::RowNotFound { key: 99 });
    assert_eq!(library.dump().unwrap(), before);
}

#[test]
fn form_clears_after_add() {
    let mut library = Library::cache();
    library.set_field(BookField::Author, "A. Author").unwrap();
    library.set_field(BookField::Title, "Title One").unwrap();
    library.submit().unwrap();
    assert_eq!(library.form().unwrap(), BookDraft::default());
}

#[test]
fn deleting_first_of_two_leaves_a_row_with_its_own_key() {
    let mut library = Library::cache();
    let first = library.add_book(draft("Title One", "120")).unwrap();
    let second = library.add_book(draft("Title Two", "88")).unwrap();

    let rows = library.delete(first).unwrap();
    assert_eq!(library.books().unwrap().len(), 1);
    assert_eq!(rows[0].key, second);
    assert_eq!(rows[0].position, 0);

    // Its delete control targets the surviving book, not position 1
    library.delete(rows[0].delete.target).unwrap();
    assert!(library.books().unwrap().is_empty());
}

#[test]
fn edits_rejected_when_rows_are_display_only() {
    let config = LedgerConfig {
        editable_rows: false,
        ..LedgerConfig::default()
    };
    let mut library = Library::open(shared_storage(), config).unwrap();
    let key = library.add_book(draft("Title One", "120")).unwrap();

    assert!(!library.render().unwrap()[0].editable);
    assert_eq!(
        library.edit(key, BookField::Title, "Other").unwrap_err(),
        Error::ReadOnlyRows
    );
}

#[test]
fn edit_is_persisted_and_rerendered() {
    let storage = shared_storage();
    let mut library = open_on(&storage);
    let key = library.add_book(draft("Title One", "120")).unwrap();

    let rows = library.edit(key, BookField::Pages, "300").unwrap();
    assert!(rows[0].text.ends_with("PAGES: 300"));
    assert_eq!(persisted(&storage)[0]["pages"], 300);
}

#[test]
fn quota_overflow_rolls_add_back() {
    let storage: std::sync::Arc<dyn SessionStorage> =
        std::sync::Arc::new(MemoryStorage::with_quota(256));
    let mut library = open_on(&storage);
    library.add_book(draft("a", "1")).unwrap();

    let err = library.add_book(draft(&"x".repeat(256), "2")).unwrap_err();
    assert!(matches!(err, Error::QuotaExceeded { .. }));
    assert_eq!(titles(&mut library), vec!["a"]);
    assert_eq!(persisted(&storage).as_array().unwrap().len(), 1);
}
