//! Integration tests for the query catalogue and its execution surface
//!
//! These tests exercise the public API end-to-end, verifying:
//! - Catalogue completeness and ordinal labelling
//! - The parameter-free read-statement policy every entry must satisfy
//! - Label lookup round-trips and serialization shape
//! - Executor failure paths: unreachable store, exhausted deadline
//! - Credential hygiene in rendered errors
//! - Operator hints attached to common failures
//!
//! No test needs a running PostgreSQL server; executor tests point at
//! addresses that cannot answer.

use std::time::Duration;

use stumps::{
    DatabaseConfig, DatabaseError, LiveError, QueryCatalogue, QueryExecutor, StumpsError,
};

// ── Catalogue shape ─────────────────────────────────────────────────────

/// Labels carry their position: entry n is labelled "Q{n+1}. ...".
#[test]
fn test_labels_are_ordinal() {
    let catalogue = QueryCatalogue::builtin();
    assert_eq!(catalogue.len(), 25);
    for (index, label) in catalogue.labels().enumerate() {
        let expected_prefix = format!("Q{}. ", index + 1);
        assert!(
            label.starts_with(&expected_prefix),
            "entry {index} is labelled {label:?}"
        );
    }
}

/// Every entry is a self-contained read statement: no bind placeholders,
/// and it starts with SELECT or WITH. The executor ships these over the
/// simple-query protocol, which cannot carry parameters.
#[test]
fn test_entries_are_parameter_free_read_statements() {
    let catalogue = QueryCatalogue::builtin();
    for definition in catalogue.iter() {
        assert!(
            !definition.sql.contains('$'),
            "{} carries a bind placeholder",
            definition.label
        );
        let head = definition.sql.trim_start().to_uppercase();
        assert!(
            head.starts_with("SELECT") || head.starts_with("WITH"),
            "{} is not a read statement",
            definition.label
        );
    }
}

/// Every listed label resolves back to its own definition.
#[test]
fn test_every_label_resolves() {
    let catalogue = QueryCatalogue::builtin();
    for label in catalogue.labels() {
        let definition = catalogue.get(label).unwrap();
        assert_eq!(definition.label, label);
    }
}

/// Iteration order and label order agree; both are presentation order.
#[test]
fn test_iteration_matches_label_order() {
    let catalogue = QueryCatalogue::builtin();
    let from_iter: Vec<&str> = catalogue.iter().map(|d| d.label.as_str()).collect();
    let from_labels: Vec<&str> = catalogue.labels().collect();
    assert_eq!(from_iter, from_labels);
}

/// Definitions serialize with plain `label` and `sql` fields.
#[test]
fn test_definition_serializes_label_and_sql() {
    let catalogue = QueryCatalogue::builtin();
    let definition = catalogue.get("Q6. Count players by role").unwrap();
    let value = serde_json::to_value(definition).unwrap();
    assert_eq!(value["label"], "Q6. Count players by role");
    assert!(value["sql"].as_str().unwrap().contains("GROUP BY"));
}

// ── Executor failure paths ──────────────────────────────────────────────

fn unreachable_config() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        // Nothing listens on the discard port.
        port: 9,
        dbname: "cricket".to_string(),
        user: "postgres".to_string(),
        password: Some("a-password-under-test".to_string()),
    }
}

/// An unreachable store surfaces as an error, never a hang: the deadline
/// covers connect time too.
#[tokio::test]
async fn test_unreachable_store_errors_within_deadline() {
    let executor =
        QueryExecutor::new(unreachable_config()).with_timeout(Duration::from_millis(500));
    let catalogue = QueryCatalogue::builtin();
    let definition = catalogue.get("Q1. Players from India").unwrap();

    let err = executor.execute(definition).await.unwrap_err();
    assert!(matches!(
        err,
        StumpsError::Database(DatabaseError::Connection { .. })
            | StumpsError::Database(DatabaseError::Timeout { .. })
    ));
}

/// Connection failures never leak the password into the rendered error.
#[tokio::test]
async fn test_connection_error_omits_password() {
    let executor =
        QueryExecutor::new(unreachable_config()).with_timeout(Duration::from_millis(500));
    let catalogue = QueryCatalogue::builtin();
    let definition = catalogue.get("Q1. Players from India").unwrap();

    let err = executor.execute(definition).await.unwrap_err();
    let rendered = format!("{err} / {err:?}");
    assert!(!rendered.contains("a-password-under-test"));
}

// ── Operator hints ──────────────────────────────────────────────────────

#[test]
fn test_unknown_label_hint_points_at_listing() {
    let err = QueryCatalogue::builtin()
        .get("Q99. Not a question")
        .unwrap_err();
    assert!(format!("{err}").contains("Q99. Not a question"));
    let hint = err.hint().unwrap();
    assert!(hint.contains("stumps queries list"));
}

#[test]
fn test_timeout_hint_names_the_flag() {
    let err: StumpsError = DatabaseError::timeout(250).into();
    let hint = err.hint().unwrap();
    assert!(hint.contains("--query-timeout-ms"));
    assert!(hint.contains("250"));
}

#[test]
fn test_missing_api_key_hint_names_the_variable() {
    let err: StumpsError = LiveError::MissingApiKey.into();
    let hint = err.hint().unwrap();
    assert!(hint.contains("RAPIDAPI_KEY"));
}
