//! Page count coercion as it surfaces in rows and the persisted slot.

use proptest::prelude::*;

use crate::common::*;

fn rendered_pages(input: &str) -> String {
    let mut library = Library::cache();
    library.add_book(draft("t", input)).unwrap();
    let rows = library.render().unwrap();
    rows[0]
        .text
        .lines()
        .last()
        .unwrap()
        .trim_start_matches("PAGES: ")
        .to_string()
}

#[test]
fn coercion_table() {
    let cases = [
        ("120", "120"),
        ("  42  ", "42"),
        ("", "0"),
        ("   ", "0"),
        ("1e3", "1000"),
        ("-.5", "-0.5"),
        ("+12", "12"),
        ("0x1F", "31"),
        ("0b101", "5"),
        ("0o17", "15"),
        ("Infinity", "Infinity"),
        ("-Infinity", "-Infinity"),
        ("abc", "NaN"),
        ("12abc", "NaN"),
        ("inf", "NaN"),
        ("1_000", "NaN"),
    ];
    for (input, expected) in cases {
        assert_eq!(rendered_pages(input), expected, "input {:?}", input);
    }
}

#[test]
fn non_numeric_pages_persist_as_null() {
    let storage = shared_storage();
    let mut library = open_on(&storage);
    let key = library.add_book(draft("t", "abc")).unwrap();

    assert_eq!(library.book(key).unwrap().unwrap().pages, Pages::Invalid);
    assert_eq!(persisted(&storage)[0]["pages"], serde_json::Value::Null);

    library.reload().unwrap();
    assert_eq!(library.book(key).unwrap().unwrap().pages, Pages::Invalid);
}

#[test]
fn strict_pages_rejects_before_commit() {
    let config = LedgerConfig {
        strict_pages: true,
        ..LedgerConfig::default()
    };
    let mut library = Library::open(shared_storage(), config).unwrap();
    let err = library.add_book(draft("t", "abc")).unwrap_err();
    assert_eq!(err, Error::InvalidPages { input: "abc".into() });
    assert!(library.books().unwrap().is_empty());
    assert_eq!(library.field(BookField::Pages).unwrap(), "abc");
}

proptest! {
    #[test]
    fn integer_pages_survive_reload(n in 0u32..1_000_000) {
        let storage = shared_storage();
        let mut library = open_on(&storage);
        let key = library.add_book(draft("t", &n.to_string())).unwrap();
        library.reload().unwrap();
        let book = library.book(key).unwrap().unwrap();
        prop_assert_eq!(book.pages, Pages::from(n));
    }
}
