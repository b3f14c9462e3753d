//! In-memory tabular result set

use serde::{Deserialize, Serialize};

/// Result of one analytical query execution.
///
/// Produced fresh per execution and never cached; ownership passes to the
/// rendering call. Zero rows is a valid state, distinct from failure — the
/// column list still describes the shape the store reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularResult {
    /// Column names in result order.
    pub columns: Vec<String>,
    /// Row data; each row holds one nullable string cell per column.
    pub rows: Vec<TabularRow>,
    /// Total number of rows returned.
    pub row_count: usize,
    /// Wall-clock execution time in milliseconds.
    pub execution_ms: u64,
}

impl TabularResult {
    /// True when the store returned no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single result row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularRow {
    pub values: Vec<Option<String>>,
}
