//! Ledger CLI: drive one library ledger session from the terminal.
//!
//! Three modes:
//! - **Shell mode**: `ledger [flags] COMMAND`: single command, exit
//! - **REPL mode**: `ledger [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `printf 'add --title Dune\nlist\n' | ledger`: line-by-line from stdin
//!
//! Storage is session-scoped: the ledger lives as long as the process.

mod commands;
mod format;
mod logging;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use ledger_executor::Library;

use commands::build_cli;
use format::OutputMode;
use state::SessionState;

fn main() {
    logging::init();

    let cli = build_cli();
    let matches = cli.get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let library = match open_library(&matches) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let mut state = SessionState::new(library);
    tracing::debug!(target: "ledger::cli", mode = ?output_mode, "Ledger CLI started");

    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let ok = repl::execute_action(&matches, &mut state, output_mode);
        process::exit(if ok { 0 } else { 1 });
    } else if std::io::stdin().is_terminal() {
        if let Err(e) = repl::run_repl(&mut state, output_mode) {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn open_library(matches: &clap::ArgMatches) -> Result<Library, String> {
    match matches.get_one::<String>("config") {
        Some(path) => Library::from_config_file(Path::new(path))
            .map_err(|e| format!("Failed to open ledger with config {}: {}", path, e)),
        None => Ok(Library::cache()),
    }
}
