//! Persisted slot operations.

use super::Library;
use crate::{Command, Error, Output, Result};

impl Library {
    /// Replace the in-memory ledger with the persisted mirror.
    ///
    /// Returns the number of books loaded.
    pub fn reload(&mut self) -> Result<u64> {
        match self.session.execute(Command::Reload)? {
            Output::Uint(n) => Ok(n),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Reload".into(),
            }),
        }
    }

    /// Raw text of the persisted slot, `None` when absent.
    pub fn dump(&mut self) -> Result<Option<String>> {
        match self.session.execute(Command::Dump)? {
            Output::Slot(raw) => Ok(raw),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Dump".into(),
            }),
        }
    }
}
