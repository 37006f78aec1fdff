//! Testing utilities shared by the fuzz harnesses and the regression tests.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`FuzzCommand`]: an `arbitrary` generator biased towards command-shaped strings
//! - [`test_parse_invariants`]: parse a string and check every descriptor invariant
//! - [`test_build_invariants`]: build from a kind and input and check the same invariants

use alloc::format;
use alloc::string::String;
use arbitrary::{Arbitrary, Unstructured};

use crate::table_name::is_valid_table_name;
use crate::{CommandText, Error, OperationKind, Route};

/// Leading words the generator picks from, in assorted casings.
const VERBS: &[&str] = &[
    "DELETE",
    "delete",
    "UPDATE",
    "Update",
    "INSERT",
    "insert",
    "INSERTUPDATE",
    "InsertUpdate",
    "SELECT",
    "select",
    "CREATE",
    "create",
    "ALTER",
    "DROP",
    "INSERTS",
    "SELECTED",
    "TRUNCATE",
    "",
];

/// Separators the generator places between words.
const SEPARATORS: &[&str] = &[" ", "  ", "\t", " \n "];

/// A command string that starts with a known, near-miss or empty verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzCommand(
    /// The generated text.
    pub String,
);

impl<'a> Arbitrary<'a> for FuzzCommand {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut text = String::new();
        if u.arbitrary()? {
            text.push(' ');
        }
        text.push_str(u.choose(VERBS)?);

        let words: usize = u.int_in_range(0..=3)?;
        for _ in 0..words {
            text.push_str(u.choose(SEPARATORS)?);
            let word: &str = u.arbitrary()?;
            text.push_str(word);
        }
        Ok(Self(text))
    }
}

/// Parse `input` and verify the invariants of the resulting descriptor.
///
/// # Panics
///
/// Panics if the descriptor, or the error, violates an invariant.
pub fn test_parse_invariants(input: &str) {
    match CommandText::parse(input) {
        Ok(command) => {
            check_descriptor(&command);
            if !command.operation_kind().is_mutation() {
                assert_eq!(command.as_str(), input, "query or DDL text was altered");
            }
            let reparsed = CommandText::parse(command.as_str())
                .expect("canonical text must parse again");
            assert_eq!(reparsed, command, "parsing is not idempotent");
        }
        Err(Error::EmptyOrNullCommand) => assert!(input.is_empty()),
        Err(Error::UnrecognizedCommand(command)) => assert_eq!(command, input),
        Err(Error::MalformedMutationCommand { verb, command, pos }) => {
            assert_eq!(command, input);
            assert!(OperationKind::from_mutation_verb(verb).is_some());
            assert!(pos < input.len(), "position {pos} past end of {input:?}");
            assert!(input.is_char_boundary(pos));
        }
        Err(Error::InvalidTableName(table)) => assert!(!is_valid_table_name(&table)),
    }
}

/// Build a command of `kind` from `input` and verify the invariants of the
/// resulting descriptor.
///
/// # Panics
///
/// Panics if the descriptor violates an invariant, or if a successfully built
/// mutation does not parse back to itself.
pub fn test_build_invariants(kind: OperationKind, input: &str) {
    let Ok(command) = CommandText::build(kind, input) else {
        assert!(
            input.is_empty() || (kind.is_mutation() && !is_valid_table_name(input)),
            "{kind:?} rejected valid input {input:?}"
        );
        return;
    };

    check_descriptor(&command);
    assert_eq!(command.operation_kind(), kind);
    if kind.is_mutation() {
        assert_eq!(command.target_table(), Some(input));
        assert_eq!(CommandText::parse(command.as_str()).as_ref(), Ok(&command));
    } else {
        assert_eq!(command.as_str(), input);
    }
}

/// Check the invariants every descriptor holds regardless of how it was made.
fn check_descriptor(command: &CommandText) {
    assert!(!command.as_str().is_empty(), "command text is empty");
    let kind = command.operation_kind();

    match (kind.verb(), command.target_table()) {
        (Some(verb), Some(table)) => {
            assert!(is_valid_table_name(table), "invalid table {table:?}");
            assert_eq!(command.as_str(), format!("{verb} {table}"));
            assert_eq!(command.route(), Route::Mutation { kind, table });
        }
        (None, None) => {
            let statement = command.route().statement();
            assert_eq!(statement, Some(command.as_str()));
        }
        (verb, table) => panic!("{kind:?} with verb {verb:?} and table {table:?}"),
    }

    if command.is_create_database_command() {
        assert!(
            command.as_str().trim_start_matches(' ')[..15].eq_ignore_ascii_case("CREATE DATABASE"),
            "probe disagrees with text {:?}",
            command.as_str()
        );
    }
}
