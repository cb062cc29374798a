//! Book command handlers.
//!
//! Every mutation re-renders the list before returning, so the rows a
//! caller holds always carry current keys and positions.

use ledger_core::{BookField, BookId};
use ledger_engine::{BookForm, BookList, Ledger};

use crate::{Output, Result};

fn rows(list: &BookList) -> Output {
    Output::Rows(list.rows().to_vec())
}

/// Handle BookAdd command.
///
/// The form is cleared only once the book is committed.
pub fn book_add(ledger: &mut Ledger, form: &mut BookForm, list: &mut BookList) -> Result<Output> {
    let draft = form.take();
    if let Err(e) = ledger.add(draft.clone()) {
        form.fill(&draft);
        return Err(e.into());
    }
    list.render(ledger);
    Ok(rows(list))
}

/// Handle Render command.
pub fn render(ledger: &Ledger, list: &mut BookList) -> Result<Output> {
    list.render(ledger);
    Ok(rows(list))
}

/// Handle BookDelete command.
pub fn book_delete(ledger: &mut Ledger, list: &mut BookList, key: BookId) -> Result<Output> {
    ledger.delete(key)?;
    list.render(ledger);
    Ok(rows(list))
}

/// Handle BookEdit command.
pub fn book_edit(
    ledger: &mut Ledger,
    list: &mut BookList,
    key: BookId,
    field: BookField,
    value: String,
) -> Result<Output> {
    ledger.edit(key, field, &value)?;
    list.render(ledger);
    Ok(rows(list))
}

/// Handle BookGet command.
pub fn book_get(ledger: &Ledger, key: BookId) -> Result<Output> {
    Ok(Output::MaybeBook(ledger.get(key).cloned()))
}

/// Handle BookList command.
pub fn book_list(ledger: &Ledger) -> Result<Output> {
    Ok(Output::Books(ledger.books().to_vec()))
}
