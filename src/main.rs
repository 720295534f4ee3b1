//! Custody Engine HTTP Server Binary
//!
//! Loads the schedule and school calendar from a configuration directory
//! and serves the query API.
//!
//! # Usage
//!
//! ```bash
//! custody-engine --config-dir ./config/default --bind 127.0.0.1:8080 \
//!     --user-name Alex --coparent-name Jordan --timezone America/Chicago
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use custody_engine::api::{AppState, create_router};
use custody_engine::config::{ConfigSources, DisplaySettings};
use custody_engine::engine::CustodyEngine;

#[derive(Parser)]
#[command(
    name = "custody-engine",
    version,
    about = "Custody and holiday schedule query server"
)]
struct Args {
    /// Directory holding schedule.yaml and (optionally) school_calendar.yaml
    #[arg(long, default_value = "./config/default")]
    config_dir: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Display name for the user
    #[arg(long, default_value = "You")]
    user_name: String,

    /// Display name for the co-parent
    #[arg(long, default_value = "Co-parent")]
    coparent_name: String,

    /// IANA timezone of the household, e.g. America/Chicago
    #[arg(long, default_value = "UTC")]
    timezone: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let timezone: Tz = args
        .timezone
        .parse()
        .map_err(|e| anyhow!("invalid timezone '{}': {}", args.timezone, e))?;
    let display = DisplaySettings::new(args.user_name, args.coparent_name, timezone);

    info!(config_dir = %args.config_dir.display(), "Starting custody engine");
    let engine = CustodyEngine::open(ConfigSources::from_dir(&args.config_dir), display);
    if let Err(err) = engine.custody_status(engine.display().local_date(chrono::Utc::now())) {
        warn!(error = %err, "Schedule unavailable; custody queries will fail until reloaded");
    }

    let app = create_router(AppState::new(engine));

    info!("Server listening on http://{}", args.bind);
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    axum::serve(listener, app).await?;

    Ok(())
}
