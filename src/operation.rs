//! Enumeration of the statement families a command can belong to, and the
//! verb table used to recognize mutation commands.

use core::fmt::{self, Display};

/// The category of a command, fixed once the command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationKind {
    /// A query, sent to the service as-is.
    Select,
    /// Insert rows into a single table.
    Insert,
    /// Update rows of a single table.
    Update,
    /// Delete rows from a single table.
    Delete,
    /// Insert rows, or update them when they already exist.
    InsertOrUpdate,
    /// A schema statement (`CREATE`, `ALTER` or `DROP`).
    Ddl,
}

/// Mutation verbs in the order they are tried against the first token.
///
/// Matching is by whole-token equality, so `INSERTUPDATE` can never be
/// taken for `INSERT` regardless of the position of either entry.
const MUTATION_VERBS: [(&str, OperationKind); 4] = [
    ("DELETE", OperationKind::Delete),
    ("UPDATE", OperationKind::Update),
    ("INSERT", OperationKind::Insert),
    ("INSERTUPDATE", OperationKind::InsertOrUpdate),
];

/// Verb introducing a query.
pub(crate) const QUERY_VERB: &str = "SELECT";

/// Verbs introducing a schema statement.
pub(crate) const DDL_VERBS: [&str; 3] = ["CREATE", "ALTER", "DROP"];

impl OperationKind {
    /// The four mutation kinds, in verb-matching order.
    pub const MUTATIONS: [OperationKind; 4] = [
        OperationKind::Delete,
        OperationKind::Update,
        OperationKind::Insert,
        OperationKind::InsertOrUpdate,
    ];

    /// Returns the canonical verb of a mutation kind, `None` for queries and DDL.
    ///
    /// # Example
    ///
    /// ```
    /// use command_text::OperationKind;
    ///
    /// assert_eq!(OperationKind::InsertOrUpdate.verb(), Some("INSERTUPDATE"));
    /// assert_eq!(OperationKind::Select.verb(), None);
    /// ```
    #[must_use]
    pub const fn verb(self) -> Option<&'static str> {
        match self {
            OperationKind::Delete => Some("DELETE"),
            OperationKind::Update => Some("UPDATE"),
            OperationKind::Insert => Some("INSERT"),
            OperationKind::InsertOrUpdate => Some("INSERTUPDATE"),
            OperationKind::Select | OperationKind::Ddl => None,
        }
    }

    /// Returns whether this kind targets exactly one table with `<VERB> <table>`.
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        self.verb().is_some()
    }

    /// Returns whether this is [`OperationKind::Select`].
    #[must_use]
    pub const fn is_query(self) -> bool {
        matches!(self, OperationKind::Select)
    }

    /// Returns whether this is [`OperationKind::Ddl`].
    #[must_use]
    pub const fn is_ddl(self) -> bool {
        matches!(self, OperationKind::Ddl)
    }

    /// Looks up a mutation kind by its verb, ignoring ASCII case.
    ///
    /// The whole token must equal the verb: prefixes and longer words do not match.
    #[must_use]
    pub fn from_mutation_verb(token: &str) -> Option<OperationKind> {
        MUTATION_VERBS
            .iter()
            .find(|(verb, _)| verb.eq_ignore_ascii_case(token))
            .map(|&(_, kind)| kind)
    }

    /// Returns whether the token introduces a query.
    pub(crate) fn is_query_verb(token: &str) -> bool {
        QUERY_VERB.eq_ignore_ascii_case(token)
    }

    /// Returns whether the token introduces a schema statement.
    pub(crate) fn is_ddl_verb(token: &str) -> bool {
        DDL_VERBS.iter().any(|verb| verb.eq_ignore_ascii_case(token))
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verb() {
            Some(verb) => f.write_str(verb),
            None if self.is_query() => f.write_str(QUERY_VERB),
            None => f.write_str("DDL"),
        }
    }
}

// ============================================================================
// Arbitrary implementation for testing
// ============================================================================

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::OperationKind;
    use arbitrary::{Arbitrary, Unstructured};

    impl<'a> Arbitrary<'a> for OperationKind {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            Ok(*u.choose(&[
                Self::Select,
                Self::Insert,
                Self::Update,
                Self::Delete,
                Self::InsertOrUpdate,
                Self::Ddl,
            ])?)
        }
    }
}
