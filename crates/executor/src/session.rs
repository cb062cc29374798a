//! Stateful session: one ledger page.
//!
//! The [`Session`] owns the three pieces of page state (the ledger with its
//! persisted mirror, the entry form and the rendered list) and dispatches
//! every [`Command`] against them. Opening a session reloads the ledger from
//! storage and renders it, the way a page load would.
//!
//! # Usage
//!
//! ```ignore
//! use ledger_executor::{BookField, Command, Session};
//!
//! let mut session = Session::cache();
//!
//! session.execute(Command::FormSet { field: BookField::Title, value: "Title One".into() })?;
//! session.execute(Command::FormSet { field: BookField::Pages, value: "120".into() })?;
//! let rows = session.execute(Command::BookAdd)?;
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use ledger_engine::{BookForm, BookList, Ledger, LedgerConfig};
use ledger_storage::SessionStorage;

use crate::handlers::{book, form, session, slot};
use crate::{Command, Output, Result};

/// A ledger page: ledger, form and rendered list, driven by commands.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    ledger: Ledger,
    form: BookForm,
    list: BookList,
}

impl Session {
    /// Open a session over `storage`, reloading whatever the slot holds.
    ///
    /// # Errors
    ///
    /// `Config` for an invalid config, `Serialization` for a malformed slot.
    pub fn open(storage: Arc<dyn SessionStorage>, config: LedgerConfig) -> Result<Self> {
        let ledger = Ledger::open(storage, config)?;
        Ok(Self::from_ledger(ledger))
    }

    /// Open a session on fresh storage built from `config`.
    pub fn with_config(config: LedgerConfig) -> Result<Self> {
        let ledger = Ledger::with_config(config)?;
        Ok(Self::from_ledger(ledger))
    }

    /// Open an empty session on fresh default storage.
    pub fn cache() -> Self {
        Self::from_ledger(Ledger::cache())
    }

    fn from_ledger(ledger: Ledger) -> Self {
        let mut list = BookList::new();
        list.render(&ledger);
        let id = Uuid::new_v4();
        info!(
            target: "ledger::session",
            session = %id,
            key = %ledger.mirror().key(),
            books = ledger.len(),
            "Session opened"
        );
        Self {
            id,
            ledger,
            form: BookForm::new(),
            list,
        }
    }

    /// Execute a single command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let mutation = cmd.is_mutation();

        let result = match cmd {
            // Form
            Command::FormSet { field, value } => form::form_set(&mut self.form, field, value),
            Command::FormGet { field } => form::form_get(&self.form, field),
            Command::FormShow => form::form_show(&self.form),
            Command::FormClear => form::form_clear(&mut self.form),

            // Book
            Command::BookAdd => book::book_add(&mut self.ledger, &mut self.form, &mut self.list),
            Command::Render => book::render(&self.ledger, &mut self.list),
            Command::BookDelete { key } => book::book_delete(&mut self.ledger, &mut self.list, key),
            Command::BookEdit { key, field, value } => {
                book::book_edit(&mut self.ledger, &mut self.list, key, field, value)
            }
            Command::BookGet { key } => book::book_get(&self.ledger, key),
            Command::BookList => book::book_list(&self.ledger),

            // Slot
            Command::Reload => slot::reload(&mut self.ledger, &mut self.list),
            Command::Dump => slot::dump(&self.ledger),

            // Session
            Command::Info => session::info(&self.id, &self.ledger),
            Command::Ping => session::ping(),
        };

        match &result {
            Ok(_) if mutation => {
                debug!(target: "ledger::session", command = name, books = self.ledger.len(), "Command executed")
            }
            Ok(_) => {}
            Err(e) => warn!(target: "ledger::session", command = name, error = %e, "Command failed"),
        }
        result
    }

    /// Execute commands in order, collecting every result.
    ///
    /// A failing command does not stop the ones after it.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Session id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The entry form
    pub fn form(&self) -> &BookForm {
        &self.form
    }

    /// The rendered list
    pub fn list(&self) -> &BookList {
        &self.list
    }
}
