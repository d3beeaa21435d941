//! HTTP server binary for the time-bank engine.
//!
//! Usage:
//!   time-bank-engine [--config <dir>] [--bind <addr>]
//!
//! Log filtering follows `RUST_LOG` and defaults to `info`.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use time_bank_engine::api::{AppState, create_router};
use time_bank_engine::config::ConfigLoader;

/// Time-bank engine server.
#[derive(Parser, Debug)]
#[command(name = "time-bank-engine", version, about = "Work-balance engine HTTP server")]
struct Cli {
    /// Directory holding schedule.yaml and holidays.yaml.
    #[arg(short = 'c', long = "config", default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long = "bind", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    info!(path = %cli.config.display(), "Loading configuration");
    let config = ConfigLoader::load(&cli.config)?;
    info!(
        reference_date = %config.policy().reference_date,
        holidays = config.holidays().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
