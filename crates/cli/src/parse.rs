//! ArgMatches → Command/MetaCommand conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Standard commands → `CliAction::Execute(Command)`
//! - `add` with field flags → `CliAction::Sequence` (form sets, then the add)
//!
//! REPL meta-commands are recognized on the raw line by [`check_meta_command`]
//! before clap sees it.

use clap::ArgMatches;
use ledger_executor::{BookField, BookId, Command};

/// The result of parsing user input.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// A standard command to execute via Session.
    Execute(Command),
    /// Commands executed in order; only the last output is printed.
    Sequence(Vec<Command>),
}

/// REPL meta-commands.
#[derive(Debug, PartialEq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
    Clear,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next()?;

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "help" => {
            let command = parts
                .next()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            Some(MetaCommand::Help { command })
        }
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "form" => parse_form(sub_matches),
        "add" => parse_add(sub_matches),
        "list" => Ok(CliAction::Execute(Command::Render)),
        "get" => Ok(CliAction::Execute(Command::BookGet {
            key: parse_key(sub_matches)?,
        })),
        "del" => Ok(CliAction::Execute(Command::BookDelete {
            key: parse_key(sub_matches)?,
        })),
        "edit" => Ok(CliAction::Execute(Command::BookEdit {
            key: parse_key(sub_matches)?,
            field: parse_field(sub_matches)?,
            value: required(sub_matches, "value")?,
        })),
        "reload" => Ok(CliAction::Execute(Command::Reload)),
        "dump" => Ok(CliAction::Execute(Command::Dump)),
        "info" => Ok(CliAction::Execute(Command::Info)),
        "ping" => Ok(CliAction::Execute(Command::Ping)),
        other => Err(format!("Unknown command: {}", other)),
    }
}

// =========================================================================
// Argument helpers
// =========================================================================

fn required(matches: &ArgMatches, name: &str) -> Result<String, String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn parse_key(matches: &ArgMatches) -> Result<BookId, String> {
    let raw = required(matches, "key")?;
    raw.trim()
        .parse::<u64>()
        .map(BookId::new)
        .map_err(|_| format!("Invalid key: {:?} (expected a non-negative integer)", raw))
}

fn parse_field(matches: &ArgMatches) -> Result<BookField, String> {
    let raw = required(matches, "field")?;
    raw.parse::<BookField>().map_err(|e| e.to_string())
}

// =========================================================================
// Form / Add
// =========================================================================

fn parse_form(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "form requires a subcommand".to_string())?;

    let cmd = match sub_name {
        "set" => Command::FormSet {
            field: parse_field(sub_matches)?,
            value: required(sub_matches, "value")?,
        },
        "get" => Command::FormGet {
            field: parse_field(sub_matches)?,
        },
        "show" => Command::FormShow,
        "clear" => Command::FormClear,
        other => return Err(format!("Unknown form subcommand: {}", other)),
    };
    Ok(CliAction::Execute(cmd))
}

fn parse_add(matches: &ArgMatches) -> Result<CliAction, String> {
    let mut cmds: Vec<Command> = BookField::ALL
        .iter()
        .filter_map(|field| {
            matches
                .get_one::<String>(field.name())
                .map(|value| Command::FormSet {
                    field: *field,
                    value: value.clone(),
                })
        })
        .collect();

    if cmds.is_empty() {
        return Ok(CliAction::Execute(Command::BookAdd));
    }
    cmds.push(Command::BookAdd);
    Ok(CliAction::Sequence(cmds))
}
