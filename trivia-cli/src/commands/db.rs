//! Database maintenance commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trivia_core::TriviaConfig;
use trivia_server::db::{migrations, seed};

#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: DbCommands,
}

#[derive(Subcommand, Debug)]
pub enum DbCommands {
    /// Create tables if missing
    Migrate,
    /// Load the reference categories and questions
    Seed(SeedArgs),
}

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Delete every existing row first
    #[arg(long)]
    pub reset: bool,
}

pub async fn run_db(args: DbArgs, config: TriviaConfig) -> Result<()> {
    let pool = super::connect(args.database_url, &config).await?;

    match args.command {
        DbCommands::Migrate => {
            migrations::run(&pool).await.context("Migrations failed")?;
            println!("✅ Schema is up to date");
        }
        DbCommands::Seed(seed_args) => {
            migrations::run(&pool).await.context("Migrations failed")?;
            if seed_args.reset {
                seed::reset(&pool).await.context("Reset failed")?;
            }
            seed::run(&pool).await.context("Seeding failed")?;
            println!("✅ Reference data loaded");
        }
    }

    Ok(())
}
