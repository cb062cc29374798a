//! Book records and their identifiers
//!
//! A [`Book`] is what the ledger stores. A [`BookDraft`] is the raw text of
//! the four form fields; turning a draft into a book coerces the page count
//! and attaches a [`BookId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pages::Pages;

/// Stable identifier of a book within one ledger.
///
/// Ids come from a counter that only moves forward, so an id is never
/// reused for a different book in the same session, and it does not change
/// when other books are removed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Create a BookId from its raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value of this id
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` past the last representable id
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<u64> for BookId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four fields of a book, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookField {
    /// Author name
    Author,
    /// Book title
    Title,
    /// Genre
    Genre,
    /// Page count
    Pages,
}

impl BookField {
    /// All fields in form order.
    pub const ALL: [BookField; 4] = [
        BookField::Author,
        BookField::Title,
        BookField::Genre,
        BookField::Pages,
    ];

    /// Lowercase field name, as used in commands and the persisted layout.
    pub fn name(&self) -> &'static str {
        match self {
            BookField::Author => "author",
            BookField::Title => "title",
            BookField::Genre => "genre",
            BookField::Pages => "pages",
        }
    }

    /// Label shown in front of the value in a rendered row.
    pub fn label(&self) -> &'static str {
        match self {
            BookField::Author => "AUTHOR",
            BookField::Title => "TITLE",
            BookField::Genre => "GENRE",
            BookField::Pages => "PAGES",
        }
    }

    /// Position of this field in the form.
    pub fn index(&self) -> usize {
        match self {
            BookField::Author => 0,
            BookField::Title => 1,
            BookField::Genre => 2,
            BookField::Pages => 3,
        }
    }
}

impl FromStr for BookField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "author" => Ok(BookField::Author),
            "title" => Ok(BookField::Title),
            "genre" => Ok(BookField::Genre),
            "pages" => Ok(BookField::Pages),
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A book as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identifier
    pub id: BookId,
    /// Author name
    pub author: String,
    /// Book title
    pub title: String,
    /// Genre
    pub genre: String,
    /// Coerced page count
    pub pages: Pages,
}

impl Book {
    /// Create a book from already-typed values
    pub fn new(
        id: BookId,
        author: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        pages: Pages,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            title: title.into(),
            genre: genre.into(),
            pages,
        }
    }

    /// Display text of one field.
    pub fn field_text(&self, field: BookField) -> String {
        match field {
            BookField::Author => self.author.clone(),
            BookField::Title => self.title.clone(),
            BookField::Genre => self.genre.clone(),
            BookField::Pages => self.pages.to_string(),
        }
    }

    /// Overwrite one field from text; pages are coerced.
    pub fn set_field(&mut self, field: BookField, text: &str) {
        match field {
            BookField::Author => self.author = text.to_string(),
            BookField::Title => self.title = text.to_string(),
            BookField::Genre => self.genre = text.to_string(),
            BookField::Pages => self.pages = Pages::coerce(text),
        }
    }
}

/// Raw text of the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    /// Author text
    pub author: String,
    /// Title text
    pub title: String,
    /// Genre text
    pub genre: String,
    /// Page count as typed
    pub pages: String,
}

impl BookDraft {
    /// Create a draft from four field texts
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        pages: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            genre: genre.into(),
            pages: pages.into(),
        }
    }

    /// Text of one field.
    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Author => &self.author,
            BookField::Title => &self.title,
            BookField::Genre => &self.genre,
            BookField::Pages => &self.pages,
        }
    }

    /// Coerced page count of this draft.
    pub fn coerced_pages(&self) -> Pages {
        Pages::coerce(&self.pages)
    }

    /// Build the book, coercing the page count.
    pub fn into_book(self, id: BookId) -> Book {
        let pages = self.coerced_pages();
        Book {
            id,
            author: self.author,
            title: self.title,
            genre: self.genre,
            pages,
        }
    }
}
