use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use crate::{Cli, OutputFormat};
use stumps::config::{DatabaseConfig, LiveApiConfig};
use stumps::live::LiveClient;
use stumps::query::QueryExecutor;
use stumps::store::RecordStore;
use stumps::{Result, StumpsError};

/// CLI context passed to all commands
pub(crate) struct CliContext {
    pub(crate) db: DatabaseConfig,
    pub(crate) format: OutputFormat,
    pub(crate) skip_confirm: bool,
    pub(crate) output_file: Option<PathBuf>,
    pub(crate) query_timeout_ms: u64,
    pub(crate) api_timeout_ms: u64,
}

impl CliContext {
    pub(crate) fn new(cli: &Cli) -> Self {
        // Color is enabled if: not disabled via flag AND stdout is a terminal AND no output file
        let use_color = !cli.no_color && std::io::stdout().is_terminal() && cli.output.is_none();

        // Control the colored crate's behavior
        if !use_color {
            colored::control::set_override(false);
        }

        Self {
            db: DatabaseConfig {
                host: cli.db_host.clone(),
                port: cli.db_port,
                dbname: cli.db_name.clone(),
                user: cli.db_user.clone(),
                // Env-only: the password never appears on argv.
                password: std::env::var("DB_PASSWORD").ok(),
            },
            format: cli.format,
            skip_confirm: cli.yes,
            output_file: cli.output.clone(),
            query_timeout_ms: cli.query_timeout_ms,
            api_timeout_ms: cli.api_timeout_ms,
        }
    }

    /// Executor for catalogue queries, honoring --query-timeout-ms
    pub(crate) fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(self.db.clone())
            .with_timeout(Duration::from_millis(self.query_timeout_ms))
    }

    /// Gateway for player and team records
    pub(crate) fn store(&self) -> RecordStore {
        RecordStore::new(self.db.clone())
    }

    /// Live data client; fails fast when RAPIDAPI_KEY is absent
    pub(crate) fn live_client(&self) -> Result<LiveClient> {
        let config = LiveApiConfig::from_env()?.with_timeout_ms(self.api_timeout_ms);
        LiveClient::new(config)
    }

    /// Write output to stdout or file
    pub(crate) fn write_output(&self, content: &str) -> Result<()> {
        use std::io::Write;
        match &self.output_file {
            Some(path) => {
                let mut file = std::fs::File::create(path).map_err(StumpsError::Io)?;
                file.write_all(content.as_bytes()).map_err(StumpsError::Io)?;
                eprintln!("{} Output written to {}", "✓".green(), path.display());
                Ok(())
            }
            None => {
                print!("{}", content);
                Ok(())
            }
        }
    }

    /// Standard table: condensed UTF-8 preset, dynamic column widths
    pub(crate) fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if self.output_file.is_some() {
            table.force_no_tty();
        }
        table
    }

    /// Create a spinner for long operations
    pub(crate) fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !std::io::stdout().is_terminal() {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }

    /// Ask for confirmation before destructive operations
    pub(crate) fn confirm(&self, message: &str) -> bool {
        if self.skip_confirm {
            return true;
        }

        if !std::io::stdin().is_terminal() {
            // Non-interactive mode without --yes flag
            eprintln!(
                "{}: Use --yes flag to skip confirmation in non-interactive mode",
                "warning".yellow()
            );
            return false;
        }

        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    /// Print success message
    pub(crate) fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print error message
    pub(crate) fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print warning message
    pub(crate) fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print info message
    pub(crate) fn info(&self, message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }
}
