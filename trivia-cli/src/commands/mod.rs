pub mod config;
pub mod db;
pub mod serve;

use anyhow::{Context, Result};
use trivia_core::TriviaConfig;
use trivia_server::db::{create_pool_with_options, PgPool};

/// Connect using `--database-url`, then `DATABASE_URL`/config file
pub async fn connect(database_url: Option<String>, config: &TriviaConfig) -> Result<PgPool> {
    let url = database_url
        .or_else(|| config.database.url.clone())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.trivia/config.toml")?;

    create_pool_with_options(&url, config.database.max_connections)
        .await
        .context("Failed to create database pool")
}
