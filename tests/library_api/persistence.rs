//! Reload and reopen behavior over shared session storage.

use crate::common::*;

#[test]
fn absent_slot_opens_empty() {
    let storage = shared_storage();
    let mut library = open_on(&storage);
    assert!(library.books().unwrap().is_empty());
    assert_eq!(library.reload().unwrap(), 0);
    assert_eq!(library.dump().unwrap(), None);
}

#[test]
fn legacy_slot_gets_keys_in_order() {
    let storage = shared_storage();
    storage
        .set_item(
            DEFAULT_STORAGE_KEY,
            r#"[{"author":"a","title":"one","genre":"g","pages":10},
                {"author":"b","title":"two","genre":"g","pages":null}]"#,
        )
        .unwrap();

    let mut library = open_on(&storage);
    let books = library.books().unwrap();
    assert_eq!(books[0].id, BookId::new(0));
    assert_eq!(books[1].id, BookId::new(1));
    assert_eq!(books[1].pages, Pages::Invalid);

    let next = library.add_book(draft("three", "1")).unwrap();
    assert_eq!(next, BookId::new(2));
}

#[test]
fn malformed_slot_leaves_state_intact() {
    let storage = shared_storage();
    let mut library = open_on(&storage);
    library.add_book(draft("kept", "1")).unwrap();

    storage.set_item(DEFAULT_STORAGE_KEY, "not json").unwrap();
    let err = library.reload().unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
    assert_eq!(titles(&mut library), vec!["kept"]);
}

#[test]
fn reopen_sees_previous_books() {
    let storage = shared_storage();
    {
        let mut library = open_on(&storage);
        library.add_book(draft("one", "1")).unwrap();
        library.add_book(draft("two", "2")).unwrap();
    }
    let mut library = open_on(&storage);
    assert_eq!(titles(&mut library), vec!["one", "two"]);
    assert_eq!(library.render().unwrap().len(), 2);
}

#[test]
fn custom_storage_key_is_used() {
    let storage = shared_storage();
    let config = LedgerConfig {
        storage_key: "shelf".into(),
        ..LedgerConfig::default()
    };
    let mut library = Library::open(storage.clone(), config).unwrap();
    library.add_book(draft("one", "1")).unwrap();

    assert!(storage.get_item("shelf").is_some());
    assert!(storage.get_item(DEFAULT_STORAGE_KEY).is_none());
    assert_eq!(library.info().unwrap().storage_key, "shelf");
}

#[test]
fn empty_storage_key_is_rejected() {
    let config = LedgerConfig {
        storage_key: String::new(),
        ..LedgerConfig::default()
    };
    let err = Library::open(shared_storage(), config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
