//! Integration tests for classifying command strings with `CommandText::parse`.

use command_text::{CommandText, Error, OperationKind, Route};

// =============================================================================
// Mutations
// =============================================================================

const MUTATIONS: [(&str, OperationKind); 4] = [
    ("DELETE", OperationKind::Delete),
    ("UPDATE", OperationKind::Update),
    ("INSERT", OperationKind::Insert),
    ("INSERTUPDATE", OperationKind::InsertOrUpdate),
];

#[test]
fn test_parse_every_mutation_verb() {
    for table in ["T", "Singers", "album_tracks", "_x9", "2024_sales"] {
        for (verb, kind) in MUTATIONS {
            let command = CommandText::parse(&format!("{verb} {table}")).unwrap();
            assert_eq!(command.operation_kind(), kind);
            assert_eq!(command.target_table(), Some(table));
            assert_eq!(command.as_str(), format!("{verb} {table}"));
        }
    }
}

#[test]
fn test_parse_matches_factories() {
    let factories: [(&str, fn(&str) -> Result<CommandText, Error>); 4] = [
        ("DELETE", CommandText::delete),
        ("UPDATE", CommandText::update),
        ("INSERT", CommandText::insert),
        ("INSERTUPDATE", CommandText::insert_or_update),
    ];
    for (verb, factory) in factories {
        let parsed = CommandText::parse(&format!("{verb} Singers")).unwrap();
        assert_eq!(parsed, factory("Singers").unwrap());
    }
}

#[test]
fn test_mutation_text_is_canonicalized() {
    let command = CommandText::parse("  Insert   Singers  ").unwrap();
    assert_eq!(command.as_str(), "INSERT Singers");
    assert_eq!(command, CommandText::insert("Singers").unwrap());

    let command = CommandText::parse("insertupdate Singers").unwrap();
    assert_eq!(command.as_str(), "INSERTUPDATE Singers");
}

#[test]
fn test_table_casing_is_preserved() {
    let command = CommandText::parse("delete MixedCase_Table").unwrap();
    assert_eq!(command.target_table(), Some("MixedCase_Table"));
}

#[test]
fn test_parsing_canonical_text_is_idempotent() {
    let built = CommandText::insert("T").unwrap();
    let reparsed = CommandText::parse(built.as_str()).unwrap();
    assert_eq!(reparsed, built);
    assert_eq!(CommandText::parse(reparsed.as_str()).unwrap(), built);
}

// =============================================================================
// Queries and schema statements
// =============================================================================

#[test]
fn test_parse_select_verbatim() {
    let command = CommandText::parse("SELECT * FROM T").unwrap();
    assert_eq!(command.operation_kind(), OperationKind::Select);
    assert_eq!(command.as_str(), "SELECT * FROM T");
    assert_eq!(command.target_table(), None);
}

#[test]
fn test_select_verb_is_case_insensitive() {
    let lower = CommandText::parse("select 1").unwrap();
    let upper = CommandText::parse("SELECT 1").unwrap();
    assert_eq!(lower.operation_kind(), OperationKind::Select);
    assert_eq!(upper.operation_kind(), OperationKind::Select);
    assert_eq!(lower.as_str(), "select 1");
    assert_eq!(upper.as_str(), "SELECT 1");
}

#[test]
fn test_select_keeps_spacing() {
    let input = "  SELECT   Id,\n  Name FROM Singers  ";
    let command = CommandText::parse(input).unwrap();
    assert_eq!(command.operation_kind(), OperationKind::Select);
    assert_eq!(command.as_str(), input);
}

#[test]
fn test_parse_ddl_verbatim() {
    for input in [
        "CREATE TABLE T (K STRING(MAX)) PRIMARY KEY (K)",
        "alter TABLE T ADD COLUMN V INT64",
        "Drop TABLE T",
        "CREATE INDEX TByV ON T(V)",
    ] {
        let command = CommandText::parse(input).unwrap();
        assert_eq!(command.operation_kind(), OperationKind::Ddl);
        assert_eq!(command.as_str(), input);
        assert_eq!(command.target_table(), None);
    }
}

#[test]
fn test_create_database_probe() {
    assert!(
        CommandText::parse("CREATE DATABASE foo")
            .unwrap()
            .is_create_database_command()
    );
    assert!(
        CommandText::parse("create Database foo")
            .unwrap()
            .is_create_database_command()
    );
    assert!(
        !CommandText::parse("CREATE TABLE foo (Id INT64) PRIMARY KEY (Id)")
            .unwrap()
            .is_create_database_command()
    );
    // The probe is a plain prefix check on the text.
    assert!(
        !CommandText::parse("CREATE  DATABASE foo")
            .unwrap()
            .is_create_database_command()
    );
    assert!(
        !CommandText::parse("DROP DATABASE foo")
            .unwrap()
            .is_create_database_command()
    );
}

#[test]
fn test_create_database_with_leading_spaces() {
    let command = CommandText::parse(" CREATE DATABASE x").unwrap();
    assert_eq!(command.operation_kind(), OperationKind::Ddl);
    assert_eq!(command.as_str(), " CREATE DATABASE x");
    assert!(command.is_create_database_command());
    assert_eq!(
        command.route(),
        Route::CreateDatabase(" CREATE DATABASE x")
    );
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn test_empty_command() {
    assert_eq!(CommandText::parse(""), Err(Error::EmptyOrNullCommand));
}

#[test]
fn test_single_token_is_unrecognized() {
    for input in ["DELETE", "SELECT", "CREATE", "   ", " INSERT "] {
        assert_eq!(
            CommandText::parse(input),
            Err(Error::UnrecognizedCommand(input.to_owned()))
        );
    }
}

#[test]
fn test_unknown_verbs_are_unrecognized() {
    for input in [
        "TRUNCATE TABLE T",
        "SELECTED * FROM T",
        "INSERTS T",
        "INSERT_UPDATE T",
        "WITH x AS (SELECT 1) SELECT * FROM x",
        "DELETE\tT",
    ] {
        assert!(
            matches!(
                CommandText::parse(input),
                Err(Error::UnrecognizedCommand(ref command)) if command == input
            ),
            "{input:?} should be unrecognized"
        );
    }
}

#[test]
fn test_three_tokens_are_malformed() {
    assert_eq!(
        CommandText::parse("DELETE a b"),
        Err(Error::MalformedMutationCommand {
            verb: "DELETE",
            command: "DELETE a b".to_owned(),
            pos: 9,
        })
    );
    assert!(matches!(
        CommandText::parse("update Singers SET Name = 'x'"),
        Err(Error::MalformedMutationCommand { verb: "UPDATE", pos: 15, .. })
    ));
}

#[test]
fn test_two_word_insert_update_is_not_accepted() {
    assert!(matches!(
        CommandText::parse("INSERT UPDATE Singers"),
        Err(Error::MalformedMutationCommand { verb: "INSERT", .. })
    ));
}

#[test]
fn test_invalid_table_name() {
    assert_eq!(
        CommandText::parse("INSERT bad-name!"),
        Err(Error::InvalidTableName("bad-name!".to_owned()))
    );
    assert_eq!(
        CommandText::parse("DELETE db.Singers"),
        Err(Error::InvalidTableName("db.Singers".to_owned()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CommandText::parse("DELETE a b").unwrap_err().to_string(),
        "Malformed command \"DELETE a b\" at position 9, expected \"DELETE <table>\""
    );
    assert_eq!(
        CommandText::parse("INSERT a-b").unwrap_err().to_string(),
        "Invalid table name \"a-b\": only ASCII letters, digits and underscores are allowed"
    );
}

#[test]
fn test_from_str_and_try_from() {
    let parsed: CommandText = "UPDATE Singers".parse().unwrap();
    let converted = CommandText::try_from("UPDATE Singers").unwrap();
    assert_eq!(parsed, converted);
    assert_eq!(parsed.to_string(), "UPDATE Singers");
}
