//! HTTP layer
//!
//! Axum server with:
//! - Bearer-token auth gate ahead of every handler
//! - JSON error responses
//! - Request tracing and graceful shutdown

pub mod auth;
pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
