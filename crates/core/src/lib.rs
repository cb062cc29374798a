//! Core types for the library ledger
//!
//! This crate defines the foundational types used throughout the system:
//! - BookId: Stable identifier assigned to a book when it is added
//! - Book: The record kept in the ledger
//! - BookDraft: The raw text of the four form fields before coercion
//! - BookField: Discriminates between the four book fields
//! - Pages: Page count coerced from text, with an invalid-number sentinel
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod error;
pub mod pages;

pub use book::{Book, BookDraft, BookField, BookId};
pub use error::{Error, Result};
pub use pages::Pages;
