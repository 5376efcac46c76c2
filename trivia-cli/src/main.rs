//! trivia CLI - run and maintain the trivia backend
//!
//! - `serve`: HTTP API over Postgres (or a seeded in-memory store)
//! - `db migrate` / `db seed`: schema and reference data
//! - `config path` / `config show`: inspect effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_core::TriviaConfig;

mod commands;
mod tracing_setup;

use commands::config::ConfigArgs;
use commands::db::DbArgs;
use commands::serve::ServeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "REST backend for a trivia game: questions, categories, and quizzes"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long, global = true, env = "TRIVIA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Database schema and seed data
    Db(DbArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let config = TriviaConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, config).await,
        Commands::Db(args) => commands::db::run_db(args, config).await,
        Commands::Config(args) => commands::config::run_config(args, &config),
    }
}
