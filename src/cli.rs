//! Stumps CLI - Cricket analytics from the terminal
//!
//! Catalogue queries and player records run against the PostgreSQL store;
//! live matches and career stats come from the Cricbuzz API.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use stumps::{QueryCatalogue, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_commands;
mod cli_context;
mod cli_format;
mod cli_live;
mod cli_players;
mod cli_queries;
mod cli_stats;

pub(crate) use cli_commands::*;
pub(crate) use cli_format::*;

use crate::cli_context::CliContext;

/// Stumps CLI
#[derive(Parser, Debug)]
#[command(name = "stumps")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cricket analytics from the terminal")]
#[command(long_about = r#"Cricket analytics from the terminal

Stumps answers a fixed catalogue of analytics questions against a PostgreSQL
cricket database, manages the player records behind them, and pulls live
matches, scorecards and ICC rankings from the Cricbuzz API.

QUICK START:
    # The 25 catalogue questions
    stumps queries list

    # Run one (a label prefix like Q6 is enough)
    stumps queries run Q6

    # Player records
    stumps players list
    stumps players add 42 --name "Virat Kohli" --role Batsman

    # Live matches, grouped by series
    stumps live matches

    # Career stats via Cricbuzz
    stumps stats search "Virat Kohli"
    stumps stats batting 1413

ENVIRONMENT VARIABLES:
    DB_HOST, DB_PORT        Store location (defaults: localhost, 5432)
    DB_NAME, DB_USER        Database and role (defaults: cricket, postgres)
    DB_PASSWORD             Store password; env-only, never a flag
    RAPIDAPI_KEY            Cricbuzz API key, required for live/stats
    RAPIDAPI_HOST           Cricbuzz API host override
    NO_COLOR                Disable colored output
    RUST_LOG                Log filter, overrides --log-level

For more examples, run: stumps <command> --help"#)]
struct Cli {
    /// Store host
    #[arg(long, global = true, env = "DB_HOST", default_value = "localhost")]
    db_host: String,

    /// Store port
    #[arg(long, global = true, env = "DB_PORT", default_value_t = 5432)]
    db_port: u16,

    /// Database name
    #[arg(long, global = true, env = "DB_NAME", default_value = "cricket")]
    db_name: String,

    /// Database role
    #[arg(long, global = true, env = "DB_USER", default_value = "postgres")]
    db_user: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Skip confirmation prompts (for scripting)
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    /// Write output to file instead of stdout
    #[arg(long, short = 'o', global = true)]
    output: Option<PathBuf>,

    /// Give up on a catalogue query after this many milliseconds
    #[arg(long, global = true, default_value_t = 30_000)]
    query_timeout_ms: u64,

    /// Give up on a live API request after this many milliseconds
    #[arg(long, global = true, default_value_t = 10_000)]
    api_timeout_ms: u64,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version, store target and catalogue size
    Info,

    /// Catalogue of analytics questions
    #[command(subcommand)]
    Queries(QueryCommands),

    /// List the teams in the store
    Teams,

    /// Player records: list, inspect and edit
    #[command(subcommand)]
    Players(PlayerCommands),

    /// Live matches and scorecards
    #[command(subcommand)]
    Live(LiveCommands),

    /// Player search, profiles and career stats
    #[command(subcommand)]
    Stats(StatsCommands),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let ctx = CliContext::new(&cli);

    if let Err(e) = run(cli, &ctx).await {
        ctx.error(&format!("{}", e));
        if let Some(hint) = e.hint() {
            eprintln!("  {}", hint.dimmed());
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli, ctx: &CliContext) -> Result<()> {
    match cli.command {
        Commands::Info => {
            show_info(ctx)?;
        }
        Commands::Queries(query_cmd) => {
            cli_queries::handle_query_command(query_cmd, ctx).await?;
        }
        Commands::Teams => {
            cli_players::handle_teams_command(ctx).await?;
        }
        Commands::Players(player_cmd) => {
            cli_players::handle_player_command(player_cmd, ctx).await?;
        }
        Commands::Live(live_cmd) => {
            cli_live::handle_live_command(live_cmd, ctx).await?;
        }
        Commands::Stats(stats_cmd) => {
            cli_stats::handle_stats_command(stats_cmd, ctx).await?;
        }
    }
    Ok(())
}

fn show_info(ctx: &CliContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let catalogue = QueryCatalogue::builtin();
    let api_host = std::env::var("RAPIDAPI_HOST")
        .unwrap_or_else(|_| stumps::config::DEFAULT_API_HOST.to_string());
    let api_key_set = std::env::var("RAPIDAPI_KEY").is_ok_and(|key| !key.trim().is_empty());

    match ctx.format {
        OutputFormat::Json => {
            let info = serde_json::json!({
                "version": version,
                "store": {
                    "target": ctx.db.target(),
                    "user": ctx.db.user,
                    "password_set": ctx.db.password.is_some(),
                },
                "live_api": {
                    "host": api_host,
                    "key_set": api_key_set,
                },
                "catalogue_questions": catalogue.len(),
                "query_timeout_ms": ctx.query_timeout_ms,
                "api_timeout_ms": ctx.api_timeout_ms,
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        _ => {
            println!(
                "{} {}",
                "Stumps".bold().cyan(),
                format!("v{}", version).dimmed()
            );
            println!("{}", "═".repeat(40).dimmed());
            println!();
            println!("{}: {}", "Store".bold(), ctx.db.target());
            println!("{}: {}", "User".bold(), ctx.db.user);
            println!(
                "{}: {}",
                "Password".bold(),
                if ctx.db.password.is_some() {
                    "set".green()
                } else {
                    "not set".dimmed()
                }
            );
            println!();
            println!("{}: {}", "Live API".bold(), api_host);
            println!(
                "{}: {}",
                "RAPIDAPI_KEY".bold(),
                if api_key_set {
                    "set".green()
                } else {
                    "not set".red()
                }
            );
            println!();
            println!(
                "{}: {}",
                "Catalogue questions".bold(),
                catalogue.len().to_string().green()
            );
            println!(
                "{}: {} ms query, {} ms live API",
                "Timeouts".bold(),
                ctx.query_timeout_ms,
                ctx.api_timeout_ms
            );
        }
    }
    Ok(())
}
