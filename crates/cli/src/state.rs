//! Session wrapper for the CLI.
//!
//! Holds the `Library` the CLI drives for its whole lifetime; one CLI
//! process is one ledger session.

use ledger_executor::{Command, Library, Output, Result};

/// Wraps the library handle and renders the prompt.
pub struct SessionState {
    library: Library,
}

impl SessionState {
    /// Create a new SessionState from a Library handle.
    pub fn new(library: Library) -> Self {
        Self { library }
    }

    /// Execute a command via the session.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        self.library.execute(cmd)
    }

    /// Execute commands in order, stopping at the first error.
    ///
    /// Returns the last output.
    pub fn execute_sequence(&mut self, cmds: Vec<Command>) -> Result<Option<Output>> {
        let mut last = None;
        for cmd in cmds {
            last = Some(self.execute(cmd)?);
        }
        Ok(last)
    }

    /// Generate the REPL prompt string.
    pub fn prompt(&self) -> String {
        let session = self.library.session();
        let books = session.ledger().len();
        if session.form().is_clear() {
            format!("ledger({})> ", books)
        } else {
            format!("ledger({})*> ", books)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_executor::BookField;

    #[test]
    fn test_prompt_tracks_books_and_form() {
        let mut state = SessionState::new(Library::cache());
        assert_eq!(state.prompt(), "ledger(0)> ");

        state
            .execute(Command::FormSet {
                field: BookField::Title,
                value: "Dune".into(),
            })
            .unwrap();
        assert_eq!(state.prompt(), "ledger(0)*> ");

        state.execute(Command::BookAdd).unwrap();
        assert_eq!(state.prompt(), "ledger(1)> ");
    }

    #[test]
    fn test_sequence_stops_at_first_error() {
        let mut state = SessionState::new(Library::cache());
        let result = state.execute_sequence(vec![
            Command::BookDelete {
                key: ledger_executor::BookId::new(9),
            },
            Command::BookAdd,
        ]);
        assert!(result.is_err());
        assert_eq!(state.prompt(), "ledger(0)> ");
    }
}
