// ABOUTME: Server binary for the Strava OAuth token exchange proxy
// ABOUTME: Loads configuration from the environment, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Strava Token Proxy Binary
//!
//! Serves `POST /api/strava/token` so browser clients can finish the Strava
//! OAuth flow without shipping the client secret.

use anyhow::Result;
use clap::Parser;
use strava_token_proxy::{config::ServerConfig, logging, server};
use tracing::{error, info};

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "strava-token-proxy")]
#[command(about = "Strava OAuth token exchange proxy")]
struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.http_port = port;
    }

    info!("{}", config.summary());

    if let Err(e) = server::serve(&config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
