//! Command handlers organized by area.
//!
//! | Module | Commands | Operates on |
//! |--------|----------|-------------|
//! | `form` | 4 | BookForm |
//! | `book` | 6 | Ledger, BookList |
//! | `slot` | 2 | Persisted mirror |
//! | `session` | 2 | Session diagnostics |

pub mod book;
pub mod form;
pub mod session;
pub mod slot;
