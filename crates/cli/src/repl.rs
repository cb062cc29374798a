//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::commands::build_repl_cmd;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<LedgerHelper, _> = Editor::with_config(config)?;
    rl.set_helper(Some(LedgerHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::Help { command } => {
                            print_help(command.as_deref());
                        }
                    }
                    continue;
                }

                execute_line(trimmed, state, mode);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
    Ok(())
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Returns 1 if any line failed, 0 otherwise.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if !execute_line(trimmed, state, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Tokenize, parse and execute one line. Returns true on success.
fn execute_line(line: &str, state: &mut SessionState, mode: OutputMode) -> bool {
    // Tokenize with shlex (respects quotes)
    let tokens = match shlex::split(line) {
        Some(t) => t,
        None => {
            eprintln!("(error) Invalid quoting: {}", line);
            return false;
        }
    };
    if tokens.is_empty() {
        return true;
    }

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    execute_action(&matches, state, mode)
}

/// Execute a parsed action. Returns true on success, false on error.
pub fn execute_action(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> bool {
    let result = match matches_to_action(matches) {
        Ok(CliAction::Execute(cmd)) => state.execute(cmd).map(Some),
        Ok(CliAction::Sequence(cmds)) => state.execute_sequence(cmds),
        Err(e) => {
            eprintln!("(error) {}", e);
            return false;
        }
    };

    match result {
        Ok(Some(output)) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            true
        }
        Ok(None) => true,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.ledger_history", h))
}

fn print_help(command: Option<&str>) {
    if let Some(cmd) = command {
        let cli = build_repl_cmd();
        if let Err(e) = cli.try_get_matches_from(vec![cmd, "--help"]) {
            println!("{}", e);
        }
    } else {
        println!("Available commands:");
        println!("  form        Entry form operations (set, get, show, clear)");
        println!("  add         Add a book from the form [--author --title --genre --pages]");
        println!("  list        Render every book with its row key");
        println!("  get         Show one book by key");
        println!("  del         Delete a book by key");
        println!("  edit        Edit one field of a book (edit <key> <field> <value>)");
        println!("  reload      Reload the ledger from session storage");
        println!("  dump        Print the raw persisted slot");
        println!("  info        Session information");
        println!("  ping        Ping the session");
        println!();
        println!("Meta-commands:");
        println!("  help [command]         Show help");
        println!("  quit / exit            Exit REPL");
        println!("  clear                  Clear screen");
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Known top-level commands for TAB completion.
const TOP_LEVEL_COMMANDS: &[&str] = &[
    "form", "add", "list", "get", "del", "edit", "reload", "dump", "info", "ping", "help", "quit",
    "exit", "clear",
];

/// Known second words for each top-level command.
fn subcommands_for(cmd: &str) -> &'static [&'static str] {
    match cmd {
        "form" => &["set", "get", "show", "clear"],
        "add" => &["--author", "--title", "--genre", "--pages"],
        _ => &[],
    }
}

const FIELD_NAMES: &[&str] = &["author", "title", "genre", "pages"];

fn candidates(words: &[&str], prefix: &str) -> Vec<Pair> {
    words
        .iter()
        .filter(|w| w.starts_with(prefix))
        .map(|w| Pair {
            display: w.to_string(),
            replacement: w.to_string(),
        })
        .collect()
}

/// Completion for the word being typed at the end of `line`.
fn complete_line(line: &str) -> (usize, Vec<Pair>) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let trailing_space = line.ends_with(' ');

    // Words already finished, and the partial word under the cursor
    let (done, prefix) = if trailing_space || parts.is_empty() {
        (parts.as_slice(), "")
    } else {
        (&parts[..parts.len() - 1], parts[parts.len() - 1])
    };
    let start = line.len() - prefix.len();

    let words: &[&str] = match done {
        [] => TOP_LEVEL_COMMANDS,
        [cmd] => subcommands_for(cmd),
        ["form", "set" | "get"] => FIELD_NAMES,
        ["edit", _key] => FIELD_NAMES,
        _ => &[],
    };
    (start, candidates(words, prefix))
}

struct LedgerHelper;

impl Helper for LedgerHelper {}
impl Validator for LedgerHelper {}
impl Highlighter for LedgerHelper {}
impl Hinter for LedgerHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for LedgerHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_line(&line[..pos]))
    }
}
