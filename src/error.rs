//! Error types for stumps
//!
//! This module defines the main error type used throughout stumps along with
//! the structured domain errors it routes: catalogue lookups, relational
//! store access, and the live data boundary.

use thiserror::Error;

/// Result type alias for stumps operations
pub type Result<T> = std::result::Result<T, StumpsError>;

/// Structured catalogue error domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("unknown query label: {0}")]
    UnknownLabel(String),
    #[error("{0}")]
    Message(String),
}

impl CatalogueError {
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel(label.into())
    }
}

impl From<String> for CatalogueError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for CatalogueError {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

/// Structured relational store error domain
///
/// Connection failures carry the host/port/database context so the message
/// is actionable; credential material is never part of any variant.
#[derive(Debug, Error, Clone)]
pub enum DatabaseError {
    #[error("connection to {host}:{port}/{dbname} failed: {detail}")]
    Connection {
        host: String,
        port: u16,
        dbname: String,
        detail: String,
    },
    #[error("{detail}")]
    Query { detail: String },
    #[error("query timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },
    #[error("row decode: {detail}")]
    RowDecode { detail: String },
    #[error("{0}")]
    Message(String),
}

impl DatabaseError {
    pub fn connection(
        host: impl Into<String>,
        port: u16,
        dbname: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Connection {
            host: host.into(),
            port,
            dbname: dbname.into(),
            detail: detail.into(),
        }
    }

    /// Wrap the store's own diagnostic text, passed through unchanged.
    pub fn query(detail: impl Into<String>) -> Self {
        Self::Query {
            detail: detail.into(),
        }
    }

    pub fn timeout(elapsed_ms: u64) -> Self {
        Self::Timeout { elapsed_ms }
    }

    pub fn row_decode(detail: impl Into<String>) -> Self {
        Self::RowDecode {
            detail: detail.into(),
        }
    }
}

impl From<String> for DatabaseError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for DatabaseError {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

/// Structured live data error domain
///
/// Transport failures, non-success statuses and malformed payloads all
/// collapse into `Unavailable`; callers never distinguish them.
#[derive(Debug, Error, Clone)]
pub enum LiveError {
    #[error("RAPIDAPI_KEY is not set")]
    MissingApiKey,
    #[error("live data unavailable: {detail}")]
    Unavailable { detail: String },
}

impl LiveError {
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable {
            detail: detail.into(),
        }
    }
}

impl From<reqwest::Error> for LiveError {
    fn from(value: reqwest::Error) -> Self {
        Self::unavailable(value.to_string())
    }
}

/// Main error type for stumps
#[derive(Error, Debug)]
pub enum StumpsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Live data error: {0}")]
    Live(#[from] LiveError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StumpsError {
    // ========== Error Context Builders ==========
    //
    // Shortcuts for the common cases so call sites avoid the two-step
    // domain-then-into dance.

    /// Create a catalogue error for an unknown label
    pub fn unknown_label(label: impl Into<String>) -> Self {
        StumpsError::Catalogue(CatalogueError::unknown_label(label))
    }

    /// Create a connection error with store context (no credentials)
    pub fn connection(
        host: impl Into<String>,
        port: u16,
        dbname: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        StumpsError::Database(DatabaseError::connection(host, port, dbname, detail))
    }

    /// Create a query error carrying the store's diagnostic text
    pub fn query(detail: impl Into<String>) -> Self {
        StumpsError::Database(DatabaseError::query(detail))
    }

    /// Create a live data error
    pub fn unavailable(detail: impl Into<String>) -> Self {
        StumpsError::Live(LiveError::unavailable(detail))
    }

    /// Create a configuration error
    pub fn config(detail: impl Into<String>) -> Self {
        StumpsError::Config(detail.into())
    }

    /// Actionable follow-up for the CLI to print under the error message
    pub fn hint(&self) -> Option<String> {
        match self {
            StumpsError::Catalogue(CatalogueError::UnknownLabel(_)) => {
                Some("Run 'stumps queries list' to see every available label.".to_string())
            }
            StumpsError::Database(DatabaseError::Connection { host, port, .. }) => Some(format!(
                "Is PostgreSQL reachable at {}:{}? Check --db-host/--db-port and DB_PASSWORD.",
                host, port
            )),
            StumpsError::Database(DatabaseError::Timeout { elapsed_ms }) => Some(format!(
                "The query gave up after {} ms. Raise --query-timeout-ms to allow more time.",
                elapsed_ms
            )),
            StumpsError::Live(LiveError::MissingApiKey) => Some(
                "Export RAPIDAPI_KEY with a Cricbuzz API key before running live or stats commands."
                    .to_string(),
            ),
            StumpsError::Live(LiveError::Unavailable { .. }) => {
                Some("The live data source did not answer; try again in a moment.".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_display() {
        let err = StumpsError::unknown_label("Q26. Does not exist");
        assert_eq!(
            err.to_string(),
            "Catalogue error: unknown query label: Q26. Does not exist"
        );
    }

    #[test]
    fn test_connection_display_includes_target_context() {
        let err = StumpsError::connection("db.internal", 5433, "cricket", "refused");
        assert_eq!(
            err.to_string(),
            "Database error: connection to db.internal:5433/cricket failed: refused"
        );
    }

    #[test]
    fn test_query_display_passes_diagnostic_through() {
        let err = StumpsError::query("relation \"playrs\" does not exist");
        assert_eq!(
            err.to_string(),
            "Database error: relation \"playrs\" does not exist"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = StumpsError::Database(DatabaseError::timeout(30_000));
        assert_eq!(
            err.to_string(),
            "Database error: query timed out after 30000 ms"
        );
    }

    #[test]
    fn test_unavailable_display() {
        let err = StumpsError::unavailable("HTTP 503");
        assert_eq!(err.to_string(), "Live data error: live data unavailable: HTTP 503");
    }

    #[test]
    fn test_missing_api_key_display() {
        let err = StumpsError::Live(LiveError::MissingApiKey);
        assert_eq!(err.to_string(), "Live data error: RAPIDAPI_KEY is not set");
    }

    #[test]
    fn test_domain_message_from_str() {
        let err: DatabaseError = "boom".into();
        assert_eq!(err.to_string(), "boom");
        let err: CatalogueError = String::from("bad entry").into();
        assert_eq!(err.to_string(), "bad entry");
    }

    #[test]
    fn test_hint_unknown_label() {
        let err = StumpsError::unknown_label("Q99");
        let hint = err.hint().unwrap();
        assert!(hint.contains("stumps queries list"));
    }

    #[test]
    fn test_hint_connection_names_target() {
        let err = StumpsError::connection("localhost", 5432, "cricket", "refused");
        let hint = err.hint().unwrap();
        assert!(hint.contains("localhost:5432"));
        assert!(hint.contains("DB_PASSWORD"));
    }

    #[test]
    fn test_hint_missing_api_key() {
        let err = StumpsError::Live(LiveError::MissingApiKey);
        let hint = err.hint().unwrap();
        assert!(hint.contains("RAPIDAPI_KEY"));
    }

    #[test]
    fn test_io_error_has_no_hint() {
        let err = StumpsError::Io(std::io::Error::other("disk"));
        assert!(err.hint().is_none());
    }
}
