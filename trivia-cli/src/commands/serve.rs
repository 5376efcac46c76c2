//! HTTP server command
//!
//! Serves the trivia API from Postgres, or from a seeded in-memory store
//! with `--in-memory`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_core::{MemoryStore, QuestionStore, RandomSource, SeededRandom, ThreadRandom, TriviaConfig};
use trivia_server::db::{migrations, PgQuestionStore};
use trivia_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config; default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Only allow the origins listed in the config file
    #[arg(long)]
    pub strict_cors: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Serve the reference dataset from memory instead of Postgres
    #[arg(long)]
    pub in_memory: bool,

    /// Create tables before serving
    #[arg(long)]
    pub migrate: bool,

    /// Seed the quiz PRNG for reproducible question order
    #[arg(long)]
    pub quiz_seed: Option<u64>,
}

fn server_config(args: &ServeArgs, config: &TriviaConfig) -> ServerConfig {
    let mut server = ServerConfig::from(&config.server);
    if let Some(bind) = args.bind {
        server.bind_addr = bind;
    }
    if args.strict_cors {
        server.cors_permissive = false;
    }
    server
}

fn random_source(args: &ServeArgs, config: &TriviaConfig) -> Arc<dyn RandomSource> {
    match args.quiz_seed.or(config.quiz.seed) {
        Some(seed) => {
            tracing::info!(seed, "Quiz selection uses a fixed seed");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: TriviaConfig) -> Result<()> {
    let server = server_config(&args, &config);
    let random = random_source(&args, &config);

    let store: Arc<dyn QuestionStore> = if args.in_memory {
        tracing::warn!("Serving from memory - changes are lost on shutdown");
        Arc::new(MemoryStore::seeded())
    } else {
        let pool = super::connect(args.database_url.clone(), &config).await?;
        if args.migrate {
            migrations::run(&pool).await.context("Migrations failed")?;
        }
        Arc::new(PgQuestionStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", server.bind_addr);
    run_server(AppState::new(store, random), server)
        .await
        .context("Server error")?;

    Ok(())
}
