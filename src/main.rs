//! marmite-server entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use marmite_server::db;
use marmite_server::{run_server, ServerConfig};

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "marmite-server",
    version,
    about = "HTTP CRUD API for recipes and ingredients over a single SQLite file"
)]
struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Database file path
    #[arg(long, env = "MARMITE_DB", default_value = "marmite.db")]
    db_path: PathBuf,

    /// Bearer token required on every API route
    #[arg(long, env = "MARMITE_TOKEN")]
    token: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ServerArgs::parse();

    let bind_addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("invalid bind address")?;

    tracing::info!("Opening database at {}", args.db_path.display());
    let pool = db::connect(&args.db_path)
        .await
        .context("failed to open database")?;
    db::migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    run_server(
        pool,
        ServerConfig {
            bind_addr,
            auth_token: args.token,
        },
    )
    .await?;

    Ok(())
}
