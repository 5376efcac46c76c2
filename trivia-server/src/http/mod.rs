//! HTTP server layer
//!
//! Axum server with:
//! - CORS (permissive by default, origin list otherwise)
//! - Request tracing and panic catching
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod payload;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig};
