//! trivia-server: Postgres gateway and HTTP API for the trivia backend
//!
//! Serves question listing, search, creation, deletion, and quiz play over
//! JSON. All store access goes through the `QuestionStore` carried in
//! `AppState`, so the same router runs against Postgres or memory.

pub mod db;
pub mod error;
pub mod http;
pub mod state;

pub use error::{Result, ServerError};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
