//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): labelled, e.g. `(integer) 2`, `(nil)`, numbered rows
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): Bare values, tab-separated, no labels

use ledger_executor::{row_text, Book, BookDraft, BookField, Error, Output, Row, SessionInfo};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// =========================================================================
// Raw mode
// =========================================================================

fn format_raw(output: &Output) -> String {
    match output {
        Output::Form(draft) => BookField::ALL
            .iter()
            .map(|f| draft.get(*f))
            .collect::<Vec<_>>()
            .join("\t"),
        Output::Text(s) => s.clone(),
        Output::Rows(rows) => rows
            .iter()
            .map(|r| format!("{}\t{}", r.key, r.text.replace('\n', "\t")))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::MaybeBook(None) => String::new(),
        Output::MaybeBook(Some(book)) => book_raw(book),
        Output::Books(books) => books.iter().map(book_raw).collect::<Vec<_>>().join("\n"),
        Output::Uint(n) => n.to_string(),
        Output::Slot(raw) => raw.clone().unwrap_or_default(),
        Output::SessionInfo(info) => format!(
            "{}\t{}\t{}\t{}\t{}",
            info.version, info.session_id, info.books, info.storage_key, info.bytes_used
        ),
        Output::Pong { version } => version.clone(),
    }
}

fn book_raw(book: &Book) -> String {
    let mut parts = vec![book.id.to_string()];
    parts.extend(BookField::ALL.iter().map(|f| book.field_text(*f)));
    parts.join("\t")
}

// =========================================================================
// Human mode
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Form(draft) => format_form(draft),
        Output::Text(s) => format!("{:?}", s),
        Output::Rows(rows) => format_rows(rows),
        Output::MaybeBook(None) => "(nil)".to_string(),
        Output::MaybeBook(Some(book)) => format!("(key) {}\n{}", book.id, row_text(book)),
        Output::Books(books) => {
            if books.is_empty() {
                "(empty list)".to_string()
            } else {
                books
                    .iter()
                    .enumerate()
                    .map(|(i, b)| format!("{}) (key) {}\n{}", i + 1, b.id, indent(&row_text(b))))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Output::Uint(n) => format!("(integer) {}", n),
        Output::Slot(None) => "(nil)".to_string(),
        Output::Slot(Some(raw)) => raw.clone(),
        Output::SessionInfo(info) => format_info(info),
        Output::Pong { version } => format!("PONG {}", version),
    }
}

fn format_form(draft: &BookDraft) -> String {
    BookField::ALL
        .iter()
        .map(|f| format!("{}: {:?}", f.name(), draft.get(*f)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_rows(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "(empty list)".to_string();
    }
    rows.iter()
        .map(|r| {
            format!(
                "{}) (key) {}\n{}\n   [{} del {}]",
                r.position + 1,
                r.key,
                indent(&r.text),
                r.delete.label,
                r.delete.target
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_info(info: &SessionInfo) -> String {
    let quota = info
        .quota_bytes
        .map(|q| q.to_string())
        .unwrap_or_else(|| "unbounded".to_string());
    format!(
        "version: {}\nsession: {}\nbooks: {}\nnext_key: {}\nstorage_key: {}\nbytes_used: {}\nquota_bytes: {}\neditable_rows: {}\nstrict_pages: {}",
        info.version,
        info.session_id,
        info.books,
        info.next_key,
        info.storage_key,
        info.bytes_used,
        quota,
        info.editable_rows,
        info.strict_pages
    )
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("   {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}
