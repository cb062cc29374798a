//! Library API Tests
//!
//! Black-box tests through the public `library_ledger` API:
//! - Ledger properties (render, add, delete, form)
//! - Persistence through shared session storage
//! - Page count coercion as seen from rendered rows

mod common;

mod ledger_properties;
mod pages;
mod persistence;
