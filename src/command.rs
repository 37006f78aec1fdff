//! The command descriptor: canonical command text, its operation kind and the
//! table a mutation targets.

mod route;

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Display};
use core::str::FromStr;

pub use route::Route;

use crate::errors::Error;
use crate::lexer::Lexer;
use crate::operation::OperationKind;
use crate::table_name::validate_table_name;

/// Prefix identifying statements that create a database.
const CREATE_DATABASE: &str = "CREATE DATABASE";

/// An immutable, validated command.
///
/// Mutation commands always carry the canonical text `<VERB> <table>`; queries
/// and schema statements keep the text they were built from, byte for byte.
///
/// # Example
///
/// ```
/// use command_text::{CommandText, OperationKind};
///
/// let command: CommandText = "insert   Singers".parse().unwrap();
/// assert_eq!(command.operation_kind(), OperationKind::Insert);
/// assert_eq!(command.target_table(), Some("Singers"));
/// assert_eq!(command.as_str(), "INSERT Singers");
/// assert_eq!(command, CommandText::insert("Singers").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "serde_impl::RawCommandText",
        into = "serde_impl::RawCommandText"
    )
)]
pub struct CommandText {
    /// The canonical text.
    text: String,
    /// The operation family.
    kind: OperationKind,
    /// The target of a mutation, `None` for queries and schema statements.
    table: Option<String>,
}

impl CommandText {
    /// Classifies a command string.
    ///
    /// The first space-separated token selects the operation: a mutation verb
    /// (`DELETE`, `UPDATE`, `INSERT`, `INSERTUPDATE`) must be followed by
    /// exactly one table name, `SELECT` marks a query and `CREATE`, `ALTER`
    /// or `DROP` a schema statement. Verbs are matched ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// * `EmptyOrNullCommand` - If `command` is empty.
    /// * `UnrecognizedCommand` - If `command` has fewer than two tokens or an unknown verb.
    /// * `MalformedMutationCommand` - If a mutation verb is followed by more than one token.
    /// * `InvalidTableName` - If the table of a mutation is not a valid table name.
    pub fn parse(command: &str) -> Result<Self, Error> {
        if command.is_empty() {
            return Err(Error::EmptyOrNullCommand);
        }

        let mut lexer = Lexer::new(command);
        let (Some(verb), Some(table)) = (lexer.next(), lexer.next()) else {
            return Err(Error::UnrecognizedCommand(command.to_string()));
        };

        if let Some(kind) = OperationKind::from_mutation_verb(verb.text) {
            if let Some(extra) = lexer.next() {
                return Err(Error::MalformedMutationCommand {
                    verb: kind.verb().unwrap_or_default(),
                    command: command.to_string(),
                    pos: extra.pos,
                });
            }
            return Self::mutation(kind, table.text);
        }

        let kind = if OperationKind::is_query_verb(verb.text) {
            OperationKind::Select
        } else if OperationKind::is_ddl_verb(verb.text) {
            OperationKind::Ddl
        } else {
            return Err(Error::UnrecognizedCommand(command.to_string()));
        };

        Ok(Self::verbatim(kind, command))
    }

    /// Builds a command from an operation kind and its input.
    ///
    /// For mutation kinds `input` is the target table; for
    /// [`OperationKind::Select`] and [`OperationKind::Ddl`] it is the full text.
    ///
    /// # Errors
    ///
    /// * `InvalidTableName` - If `kind` is a mutation and `input` is not a valid table name.
    /// * `EmptyOrNullCommand` - If `kind` is a query or schema statement and `input` is empty.
    pub fn build(kind: OperationKind, input: &str) -> Result<Self, Error> {
        match kind {
            OperationKind::Select => Self::select(input),
            OperationKind::Ddl => Self::ddl(input),
            _ => Self::mutation(kind, input),
        }
    }

    /// Builds `DELETE <table>`.
    ///
    /// # Errors
    ///
    /// * `InvalidTableName` - If `table` is not a valid table name.
    pub fn delete(table: &str) -> Result<Self, Error> {
        Self::mutation(OperationKind::Delete, table)
    }

    /// Builds `UPDATE <table>`.
    ///
    /// # Errors
    ///
    /// * `InvalidTableName` - If `table` is not a valid table name.
    pub fn update(table: &str) -> Result<Self, Error> {
        Self::mutation(OperationKind::Update, table)
    }

    /// Builds `INSERT <table>`.
    ///
    /// # Errors
    ///
    /// * `InvalidTableName` - If `table` is not a valid table name.
    pub fn insert(table: &str) -> Result<Self, Error> {
        Self::mutation(OperationKind::Insert, table)
    }

    /// Builds `INSERTUPDATE <table>`.
    ///
    /// # Errors
    ///
    /// * `InvalidTableName` - If `table` is not a valid table name.
    pub fn insert_or_update(table: &str) -> Result<Self, Error> {
        Self::mutation(OperationKind::InsertOrUpdate, table)
    }

    /// Builds a query from its full text, kept verbatim.
    ///
    /// # Errors
    ///
    /// * `EmptyOrNullCommand` - If `sql` is empty.
    pub fn select(sql: &str) -> Result<Self, Error> {
        if sql.is_empty() {
            return Err(Error::EmptyOrNullCommand);
        }
        Ok(Self::verbatim(OperationKind::Select, sql))
    }

    /// Builds a schema statement from its full text, kept verbatim.
    ///
    /// The leading verb is not checked.
    ///
    /// # Errors
    ///
    /// * `EmptyOrNullCommand` - If `statement` is empty.
    pub fn ddl(statement: &str) -> Result<Self, Error> {
        if statement.is_empty() {
            return Err(Error::EmptyOrNullCommand);
        }
        Ok(Self::verbatim(OperationKind::Ddl, statement))
    }

    /// Builds the canonical `<VERB> <table>` command of a mutation kind.
    fn mutation(kind: OperationKind, table: &str) -> Result<Self, Error> {
        let table = validate_table_name(table)?;
        let verb = kind.verb().unwrap_or_default();
        debug_assert!(!verb.is_empty(), "{kind:?} is not a mutation");

        #[cfg(feature = "tracing")]
        tracing::trace!(%kind, table, "built mutation command");

        Ok(Self {
            text: format!("{verb} {table}"),
            kind,
            table: Some(table.to_string()),
        })
    }

    /// Wraps a query or schema statement without altering its text.
    fn verbatim(kind: OperationKind, text: &str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(%kind, len = text.len(), "built verbatim command");

        Self {
            text: text.to_string(),
            kind,
            table: None,
        }
    }

    /// Returns the canonical command text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the operation kind.
    #[inline]
    #[must_use]
    pub fn operation_kind(&self) -> OperationKind {
        self.kind
    }

    /// Returns the table targeted by a mutation, `None` for queries and
    /// schema statements.
    #[inline]
    #[must_use]
    pub fn target_table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns whether the text starts with `CREATE DATABASE`, ignoring ASCII
    /// case and leading spaces.
    ///
    /// Such statements have to run before any database exists.
    #[must_use]
    pub fn is_create_database_command(&self) -> bool {
        self.text
            .trim_start_matches(' ')
            .get(..CREATE_DATABASE.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(CREATE_DATABASE))
    }

    /// Returns how the execution layer should run this command.
    #[must_use]
    pub fn route(&self) -> Route<'_> {
        Route::from(self)
    }

    /// Consumes the command and returns its text, kind and target table.
    #[must_use]
    pub fn into_parts(self) -> (String, OperationKind, Option<String>) {
        (self.text, self.kind, self.table)
    }
}

impl FromStr for CommandText {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CommandText {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for CommandText {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Display for CommandText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// =============================================================================
// serde integration
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use alloc::string::String;
    use serde::{Deserialize, Serialize};

    use super::CommandText;
    use crate::errors::Error;
    use crate::operation::OperationKind;

    /// Wire shape of a [`CommandText`], validated on the way in.
    #[derive(Serialize, Deserialize)]
    pub(super) struct RawCommandText {
        command_text: String,
        operation_kind: OperationKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_table: Option<String>,
    }

    impl From<CommandText> for RawCommandText {
        fn from(command: CommandText) -> Self {
            let (command_text, operation_kind, target_table) = command.into_parts();
            Self {
                command_text,
                operation_kind,
                target_table,
            }
        }
    }

    impl TryFrom<RawCommandText> for CommandText {
        type Error = Error;

        fn try_from(raw: RawCommandText) -> Result<Self, Self::Error> {
            // The text of a mutation is derived, so it has to agree with the
            // kind and table it was derived from. Queries and DDL carry no table.
            let command = match (raw.operation_kind.is_mutation(), raw.target_table.as_deref()) {
                (true, Some(table)) => CommandText::build(raw.operation_kind, table)?,
                (false, None) => CommandText::build(raw.operation_kind, &raw.command_text)?,
                (true, None) | (false, Some(_)) => {
                    return Err(Error::UnrecognizedCommand(raw.command_text));
                }
            };
            if command.as_str() == raw.command_text {
                Ok(command)
            } else {
                Err(Error::UnrecognizedCommand(raw.command_text))
            }
        }
    }
}
