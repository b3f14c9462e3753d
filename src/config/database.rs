//! Relational store configuration and connection handling

use std::fmt;

use tokio_postgres::NoTls;
use tracing::{debug, error};

use crate::error::{DatabaseError, Result, StumpsError};

/// Connection settings for the PostgreSQL store.
///
/// The password is optional (trust-auth setups need none) and is sourced
/// from the environment only — it is never accepted on the command line and
/// never printed: the manual [`fmt::Debug`] impl redacts it.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Store host name.
    pub host: String,
    /// Store port.
    pub port: u16,
    /// Database name.
    pub dbname: String,
    /// Role to connect as.
    pub user: String,
    /// Password, if the server requires one.
    pub password: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "cricket".to_string(),
            user: "postgres".to_string(),
            password: None,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field(
                "password",
                &if self.password.is_some() {
                    "<redacted>"
                } else {
                    "<none>"
                },
            )
            .finish()
    }
}

impl DatabaseConfig {
    /// Load settings from `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and
    /// `DB_PASSWORD`, falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let port = match std::env::var("DB_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| StumpsError::config(format!("DB_PORT is not a port number: {raw}")))?,
            Err(_) => defaults.port,
        };
        Ok(Self {
            host: std::env::var("DB_HOST").unwrap_or(defaults.host),
            port,
            dbname: std::env::var("DB_NAME").unwrap_or(defaults.dbname),
            user: std::env::var("DB_USER").unwrap_or(defaults.user),
            password: std::env::var("DB_PASSWORD").ok(),
        })
    }

    /// Human-readable connection target, safe to log.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.dbname)
    }

    /// Open a fresh connection to the store.
    ///
    /// The returned client is scoped to one operation: dropping it tears the
    /// connection down and ends the spawned driver task. Failures map to a
    /// connection error carrying host/port/dbname context but no credential.
    pub async fn connect(&self) -> Result<tokio_postgres::Client> {
        let mut pg = tokio_postgres::Config::new();
        pg.host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user);
        if let Some(password) = &self.password {
            pg.password(password);
        }

        debug!(target = %self.target(), user = %self.user, "connecting to store");
        let (client, connection) = pg.connect(NoTls).await.map_err(|e| {
            DatabaseError::connection(&self.host, self.port, &self.dbname, e.to_string())
        })?;

        // Drive the connection until the client is dropped.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!(error = %e, "postgres connection error");
            }
        });

        Ok(client)
    }
}
