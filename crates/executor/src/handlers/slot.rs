//! Persisted slot handlers.

use ledger_engine::{BookList, Ledger};

use crate::{Output, Result};

/// Handle Reload command.
pub fn reload(ledger: &mut Ledger, list: &mut BookList) -> Result<Output> {
    let loaded = ledger.reload()?;
    list.render(ledger);
    Ok(Output::Uint(loaded as u64))
}

/// Handle Dump command.
pub fn dump(ledger: &Ledger) -> Result<Output> {
    Ok(Output::Slot(ledger.mirror().raw()))
}
