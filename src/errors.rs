//! Submodule defining the errors used across the crate.

use alloc::string::String;

/// Errors that can occur while parsing or building a command.
///
/// All of them are raised at construction time and signal a caller error:
/// retrying the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The command text, or the raw SQL handed to a factory, is empty.
    #[error("Command text must not be empty")]
    EmptyOrNullCommand,
    /// The text does not start with any known verb, or has fewer than two tokens.
    #[error("Unrecognized command: {0:?}")]
    UnrecognizedCommand(String),
    /// A mutation verb matched but the command is not exactly `<VERB> <table>`.
    #[error("Malformed command {command:?} at position {pos}, expected \"{verb} <table>\"")]
    MalformedMutationCommand {
        /// The canonical verb that matched.
        verb: &'static str,
        /// The command as supplied.
        command: String,
        /// Byte position of the first token past the table name.
        pos: usize,
    },
    /// The table name is empty or contains characters other than ASCII
    /// letters, digits and underscores.
    #[error("Invalid table name {0:?}: only ASCII letters, digits and underscores are allowed")]
    InvalidTableName(String),
}
