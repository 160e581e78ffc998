//! fanboard-server - Artist likes board
//!
//! Authenticated users view the artist roster, like/unlike artists, and
//! see near-real-time aggregate like counts over a server-push channel.

use anyhow::Result;
use clap::Parser;
use fanboard_common::config::{self, Overrides};
use fanboard_server::{build_router, sse::SseBroadcaster, AppState};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "fanboard-server", version, about = "Artist likes board")]
struct Args {
    /// Data directory (database and config file live here)
    #[arg(long, env = "FANBOARD_DATA")]
    data_dir: Option<PathBuf>,

    /// Explicit config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:5720
    #[arg(long)]
    bind: Option<String>,

    /// SQLite database file path
    #[arg(long)]
    database: Option<PathBuf>,

    /// Request header carrying the externally-resolved identity
    #[arg(long)]
    identity_header: Option<String>,

    /// Broadcast channel depth for SSE fan-out
    #[arg(long)]
    sse_capacity: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting Fanboard server v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let overrides = Overrides {
        data_dir: args.data_dir,
        config_file: args.config,
        bind: args.bind,
        database: args.database,
        identity_header: args.identity_header,
        sse_capacity: args.sse_capacity,
    };
    let config = config::load(&overrides)?;

    if let Some(parent) = config.database.parent() {
        config::ensure_data_dir(parent)?;
    }

    info!("Database path: {}", config.database.display());
    let pool = fanboard_common::db::init_database(&config.database).await?;
    fanboard_common::db::seed_artists(&pool).await?;

    let broadcaster = SseBroadcaster::new(config.sse_capacity);
    let state = AppState::new(pool, broadcaster, config.identity_header.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("fanboard-server listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
