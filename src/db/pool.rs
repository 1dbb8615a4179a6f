//! Database connection pool management
//!
//! Opens (or creates) the SQLite database file and hands out a pool with
//! foreign keys enforced, so cascade deletes on the link table happen at the
//! storage layer.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for a single-file database.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open or create the database file at the given path.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// connection fails.
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::from)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}
