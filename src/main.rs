//! tunebase - music catalog web server
//!
//! Serves search, detail, profile and recommendation pages over a SQLite
//! music database. One process, one connection pool, server-rendered HTML.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tunebase::{build_router, AppState};

/// Command-line configuration
#[derive(Debug, Parser)]
#[command(name = "tunebase", version)]
struct Args {
    /// Path to the SQLite database file (created if missing)
    #[arg(long, env = "TUNEBASE_DB", default_value = "tunebase.db")]
    database: PathBuf,

    /// Address and port to listen on
    #[arg(long, env = "TUNEBASE_BIND", default_value = "127.0.0.1:8111")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting tunebase v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    info!("Database path: {}", args.database.display());

    let pool = tunebase::db::connect(&args.database).await?;
    info!("✓ Connected to database");

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("tunebase listening on http://{}", args.bind);
    info!("Health check: http://{}/health", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
