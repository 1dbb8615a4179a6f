//! marmite-server: HTTP CRUD API for recipes and ingredients
//!
//! Exposes recipes, ingredients, and their many-to-many relation as a JSON
//! API over a single SQLite database file.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig};
