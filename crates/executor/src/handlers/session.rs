//! Session diagnostics handlers.

use uuid::Uuid;

use ledger_engine::Ledger;
use ledger_storage::SessionStorage;

use crate::types::SessionInfo;
use crate::{Output, Result};

/// Handle Info command.
pub fn info(id: &Uuid, ledger: &Ledger) -> Result<Output> {
    let storage = ledger.mirror().storage();
    let config = ledger.config();
    Ok(Output::SessionInfo(SessionInfo {
        session_id: id.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: ledger.len(),
        next_key: ledger.next_id().as_u64(),
        storage_key: ledger.mirror().key().to_string(),
        bytes_used: storage.bytes_used(),
        quota_bytes: storage.quota(),
        editable_rows: config.editable_rows,
        strict_pages: config.strict_pages,
    }))
}

/// Handle Ping command.
pub fn ping() -> Result<Output> {
    Ok(Output::Pong {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
