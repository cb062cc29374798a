//! Form command handlers.

use ledger_core::BookField;
use ledger_engine::BookForm;

use crate::{Output, Result};

/// Handle FormSet command.
pub fn form_set(form: &mut BookForm, field: BookField, value: String) -> Result<Output> {
    form.set(field, value);
    Ok(Output::Form(form.draft()))
}

/// Handle FormGet command.
pub fn form_get(form: &BookForm, field: BookField) -> Result<Output> {
    Ok(Output::Text(form.get(field).to_string()))
}

/// Handle FormShow command.
pub fn form_show(form: &BookForm) -> Result<Output> {
    Ok(Output::Form(form.draft()))
}

/// Handle FormClear command.
pub fn form_clear(form: &mut BookForm) -> Result<Output> {
    form.clear();
    Ok(Output::Form(form.draft()))
}
