//! Fixed catalogue of analytical questions
//!
//! The catalogue is an ordered label → definition registry built once at
//! startup and passed by reference to whoever needs it — there is no
//! ambient global. Fixing the question set as literal data trades
//! flexibility for determinism: every supported question is enumerable and
//! reviewable, and adding one is a code change.
//!
//! The catalogue never validates SQL against a live schema; a bad statement
//! surfaces at execution time with the store's own diagnostic.

mod builtin;

use serde::Serialize;

use crate::error::{Result, StumpsError};

/// A single catalogue entry: a labelled, self-contained read statement.
///
/// Immutable once registered. The label is the selection key and the
/// presentation string at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryDefinition {
    /// Unique human-readable label, e.g. `"Q6. Count players by role"`.
    pub label: String,
    /// The statement text, submitted to the store unmodified.
    pub sql: String,
}

/// Ordered, immutable registry of query definitions.
///
/// Iteration and [`QueryCatalogue::labels`] follow registration order,
/// which is the presentation order.
#[derive(Debug, Clone)]
pub struct QueryCatalogue {
    entries: Vec<QueryDefinition>,
}

impl QueryCatalogue {
    /// The builtin question set: 25 analytical queries over the historical
    /// cricket schema.
    pub fn builtin() -> Self {
        let entries = builtin::BUILTIN_QUERIES
            .iter()
            .map(|(label, sql)| QueryDefinition {
                label: (*label).to_string(),
                sql: (*sql).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Exact lookup by label.
    pub fn get(&self, label: &str) -> Result<&QueryDefinition> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .ok_or_else(|| StumpsError::unknown_label(label))
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &QueryDefinition> {
        self.entries.iter()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_twenty_five_entries() {
        let catalogue = QueryCatalogue::builtin();
        assert_eq!(catalogue.len(), 25);
        assert!(!catalogue.is_empty());
    }

    #[test]
    fn test_labels_keep_registration_order() {
        let catalogue = QueryCatalogue::builtin();
        let labels: Vec<&str> = catalogue.labels().collect();
        assert_eq!(labels[0], "Q1. Players from India");
        assert_eq!(labels[5], "Q6. Count players by role");
        assert_eq!(labels[24], "Q25. Time series performance by quarter");
    }

    #[test]
    fn test_labels_are_unique() {
        let catalogue = QueryCatalogue::builtin();
        let mut labels: Vec<&str> = catalogue.labels().collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), catalogue.len());
    }

    #[test]
    fn test_get_exact_label() {
        let catalogue = QueryCatalogue::builtin();
        let definition = catalogue.get("Q6. Count players by role").unwrap();
        assert!(definition.sql.contains("GROUP BY role"));
    }

    #[test]
    fn test_get_unknown_label_reports_label() {
        let catalogue = QueryCatalogue::builtin();
        let err = catalogue.get("Q99. Not a question").unwrap_err();
        assert!(err.to_string().contains("Q99. Not a question"));
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let catalogue = QueryCatalogue::builtin();
        assert!(catalogue.get("q6. count players by role").is_err());
    }

    /// Static hygiene over every entry: single read-only statement against
    /// the documented schema.
    #[test]
    fn test_every_entry_is_a_single_read_statement() {
        const KNOWN_TABLES: &[&str] = &[
            "players",
            "teams",
            "matches",
            "venues",
            "series",
            "player_master_stats",
            "batting_scorecard",
            "bowling_scorecard",
            "partnerships",
        ];

        let catalogue = QueryCatalogue::builtin();
        for definition in catalogue.iter() {
            let sql = definition.sql.trim();
            let lowered = sql.to_lowercase();
            assert!(
                lowered.starts_with("select"),
                "{} is not a read statement",
                definition.label
            );
            // A ';' anywhere but the tail would smuggle in a second statement.
            let body = sql.trim_end_matches(';');
            assert!(
                !body.contains(';'),
                "{} contains more than one statement",
                definition.label
            );
            assert!(
                KNOWN_TABLES.iter().any(|table| lowered.contains(table)),
                "{} references no documented table",
                definition.label
            );
            for forbidden in ["insert ", "update ", "delete ", "drop ", "alter "] {
                assert!(
                    !lowered.contains(forbidden),
                    "{} contains a write keyword",
                    definition.label
                );
            }
        }
    }
}
