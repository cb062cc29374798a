//! High-level typed wrapper for a ledger session.
//!
//! The [`Library`] struct wraps a [`Session`] and the [`Command`]/[`Output`]
//! enums with typed method calls.
//!
//! # Example
//!
//! ```text
//! use ledger_executor::{BookDraft, BookField, Library};
//!
//! let mut library = Library::cache();
//!
//! // Fill the form and submit it
//! library.set_field(BookField::Author, "A. Author")?;
//! library.set_field(BookField::Pages, "120")?;
//! let rows = library.submit()?;
//!
//! // Or add a whole draft at once
//! let key = library.add_book(BookDraft::new("B. Author", "Title Two", "Poetry", "88"))?;
//! library.delete(key)?;
//! ```

mod book;
mod form;
mod slot;

use std::path::Path;
use std::sync::Arc;

use ledger_engine::LedgerConfig;
use ledger_storage::SessionStorage;

use crate::types::SessionInfo;
use crate::{Command, Error, Output, Result, Session};

/// High-level typed wrapper for ledger operations.
#[derive(Debug)]
pub struct Library {
    session: Session,
}

impl Library {
    /// Open a library over `storage`, reloading whatever the slot holds.
    pub fn open(storage: Arc<dyn SessionStorage>, config: LedgerConfig) -> Result<Self> {
        Ok(Self {
            session: Session::open(storage, config)?,
        })
    }

    /// Open a library on fresh storage described by a `ledger.toml` file.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = LedgerConfig::from_file(path)?;
        Ok(Self {
            session: Session::with_config(config)?,
        })
    }

    /// Open an empty library on fresh default storage.
    pub fn cache() -> Self {
        Self {
            session: Session::cache(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Execute a raw command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        self.session.execute(cmd)
    }

    /// Session diagnostics.
    pub fn info(&mut self) -> Result<SessionInfo> {
        match self.session.execute(Command::Info)? {
            Output::SessionInfo(info) => Ok(info),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Info".into(),
            }),
        }
    }

    /// Ping; returns the crate version.
    pub fn ping(&mut self) -> Result<String> {
        match self.session.execute(Command::Ping)? {
            Output::Pong { version } => Ok(version),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Ping".into(),
            }),
        }
    }
}
