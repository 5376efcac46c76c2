//! Database layer - connection pool, schema, seed data, and the Postgres
//! question store
//!
//! Queries borrow a pooled connection for their own duration only; the
//! connection goes back to the pool when the query future completes, on
//! success or failure.

pub mod migrations;
pub mod pool;
pub mod questions;
pub mod seed;

pub use pool::{create_pool, create_pool_with_options};
pub use sqlx::PgPool;
pub use questions::PgQuestionStore;
