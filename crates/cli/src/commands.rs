//! Clap command tree definition.
//!
//! Builds the full `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("ledger")
        .about("Session-scoped library ledger")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a ledger.toml config file (default: built-in defaults)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (tab-separated, no labels)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommands(data_commands())
}

/// Build a command tree for REPL mode (no global flags).
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommands(data_commands())
}

fn data_commands() -> Vec<Command> {
    vec![
        build_form(),
        build_add(),
        build_list(),
        build_get(),
        build_del(),
        build_edit(),
        Command::new("reload").about("Reload the ledger from session storage"),
        Command::new("dump").about("Print the raw persisted slot"),
        Command::new("info").about("Session information"),
        Command::new("ping").about("Ping the session"),
    ]
}

fn field_arg() -> Arg {
    Arg::new("field")
        .required(true)
        .help("Field name: author, title, genre or pages")
}

fn key_arg() -> Arg {
    Arg::new("key").required(true).help("Row key")
}

fn value_arg() -> Arg {
    Arg::new("value")
        .required(true)
        .allow_hyphen_values(true)
        .help("New text")
}

// =========================================================================
// Form
// =========================================================================

fn build_form() -> Command {
    Command::new("form")
        .about("Entry form operations")
        .subcommand_required(true)
        .subcommand(
            Command::new("set")
                .about("Set one form field")
                .arg(field_arg())
                .arg(value_arg()),
        )
        .subcommand(
            Command::new("get")
                .about("Get one form field")
                .arg(field_arg()),
        )
        .subcommand(Command::new("show").about("Show the whole form"))
        .subcommand(Command::new("clear").about("Empty every form field"))
}

// =========================================================================
// Books
// =========================================================================

fn build_add() -> Command {
    let mut cmd = Command::new("add")
        .about("Add a book from the form; flags fill form fields first");
    for name in ["author", "title", "genre", "pages"] {
        cmd = cmd.arg(
            Arg::new(name)
                .long(name)
                .allow_hyphen_values(true)
                .help(format!("Set the {} field before adding", name)),
        );
    }
    cmd
}

fn build_list() -> Command {
    Command::new("list").about("Render every book with its row key")
}

fn build_get() -> Command {
    Command::new("get").about("Show one book").arg(key_arg())
}

fn build_del() -> Command {
    Command::new("del")
        .about("Delete the book a row key points at")
        .arg(key_arg())
}

fn build_edit() -> Command {
    Command::new("edit")
        .about("Edit one field of a book")
        .arg(key_arg())
        .arg(field_arg())
        .arg(value_arg())
}
