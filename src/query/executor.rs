//! Catalogue query execution
//!
//! One scoped connection per execution: the client is opened inside the
//! call, the whole result set is materialized eagerly, and dropping the
//! client on any exit path releases the connection. Statements travel over
//! the simple-query protocol — catalogue entries are closed, parameter-free
//! statements, and the text protocol hands every cell back as a string
//! without per-type decoding.

use std::time::{Duration, Instant};

use tokio_postgres::SimpleQueryMessage;
use tracing::{debug, info};

use super::result::{TabularResult, TabularRow};
use crate::catalogue::QueryDefinition;
use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};

/// Default execution deadline in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Executes catalogue entries against the relational store.
pub struct QueryExecutor {
    config: DatabaseConfig,
    timeout: Duration,
}

impl QueryExecutor {
    /// Create an executor with the default deadline.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Override the execution deadline. The deadline covers the whole
    /// execution, connect included, so a hung connect cannot bypass it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current deadline in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// Execute a catalogue entry and materialize the full result.
    ///
    /// Single attempt, no retry: transient failures surface to the caller,
    /// who may re-trigger. An empty result is not an error.
    pub async fn execute(&self, definition: &QueryDefinition) -> Result<TabularResult> {
        debug!(label = %definition.label, target = %self.config.target(), "executing catalogue query");
        match tokio::time::timeout(self.timeout, self.run(definition)).await {
            Ok(result) => {
                let result = result?;
                info!(
                    label = %definition.label,
                    rows = result.row_count,
                    elapsed_ms = result.execution_ms,
                    "query complete"
                );
                Ok(result)
            }
            Err(_) => Err(DatabaseError::timeout(self.timeout.as_millis() as u64).into()),
        }
    }

    async fn run(&self, definition: &QueryDefinition) -> Result<TabularResult> {
        let started = Instant::now();
        let client = self.config.connect().await?;
        let messages = client
            .simple_query(&definition.sql)
            .await
            .map_err(|e| match e.as_db_error() {
                // Pass the store's own diagnostic through unchanged.
                Some(db) => DatabaseError::query(db.message()),
                None => DatabaseError::query(e.to_string()),
            })?;

        let mut columns: Vec<String> = Vec::new();
        let mut rows: Vec<TabularRow> = Vec::new();
        for message in messages {
            match message {
                SimpleQueryMessage::RowDescription(description) => {
                    columns = description
                        .iter()
                        .map(|column| column.name().to_string())
                        .collect();
                }
                SimpleQueryMessage::Row(row) => {
                    if columns.is_empty() {
                        columns = row
                            .columns()
                            .iter()
                            .map(|column| column.name().to_string())
                            .collect();
                    }
                    let mut values = Vec::with_capacity(row.len());
                    for index in 0..row.len() {
                        let value = row
                            .try_get(index)
                            .map_err(|e| DatabaseError::row_decode(e.to_string()))?;
                        values.push(value.map(str::to_string));
                    }
                    rows.push(TabularRow { values });
                }
                SimpleQueryMessage::CommandComplete(_) => {}
                _ => {}
            }
        }

        let row_count = rows.len();
        Ok(TabularResult {
            columns,
            rows,
            row_count,
            execution_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let executor = QueryExecutor::new(DatabaseConfig::default());
        assert_eq!(executor.timeout_ms(), 30_000);
    }

    #[test]
    fn test_with_timeout_overrides_deadline() {
        let executor =
            QueryExecutor::new(DatabaseConfig::default()).with_timeout(Duration::from_millis(500));
        assert_eq!(executor.timeout_ms(), 500);
    }
}
