//! Submodule defining how a command is handed to the execution layer.

use crate::command::CommandText;
use crate::operation::OperationKind;

/// The execution path of a [`CommandText`], borrowed from it.
///
/// Queries and schema statements are sent as text. Mutations only contribute
/// their kind and table: the row values are supplied separately by the caller,
/// and the command text is kept for diagnostics.
///
/// # Example
///
/// ```
/// use command_text::{CommandText, OperationKind, Route};
///
/// let command = CommandText::update("Albums").unwrap();
/// assert_eq!(
///     command.route(),
///     Route::Mutation { kind: OperationKind::Update, table: "Albums" }
/// );
///
/// let command = CommandText::parse("CREATE DATABASE music").unwrap();
/// assert_eq!(command.route(), Route::CreateDatabase("CREATE DATABASE music"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Run the text as a query.
    Query(&'a str),
    /// Run the text as a schema statement against the current database.
    Ddl(&'a str),
    /// Run the text as a schema statement outside of any database.
    CreateDatabase(&'a str),
    /// Build a row mutation on `table` from caller-supplied values.
    Mutation {
        /// One of the four mutation kinds.
        kind: OperationKind,
        /// The table the mutation targets.
        table: &'a str,
    },
}

impl<'a> From<&'a CommandText> for Route<'a> {
    fn from(command: &'a CommandText) -> Self {
        let kind = command.operation_kind();
        match (kind.verb(), command.target_table()) {
            (Some(_), Some(table)) => Route::Mutation { kind, table },
            _ if kind.is_ddl() && command.is_create_database_command() => {
                Route::CreateDatabase(command.as_str())
            }
            _ if kind.is_ddl() => Route::Ddl(command.as_str()),
            _ => Route::Query(command.as_str()),
        }
    }
}

impl<'a> Route<'a> {
    /// Returns the text sent to the service, `None` for mutations.
    #[must_use]
    pub fn statement(self) -> Option<&'a str> {
        match self {
            Route::Query(text) | Route::Ddl(text) | Route::CreateDatabase(text) => Some(text),
            Route::Mutation { .. } => None,
        }
    }
}
