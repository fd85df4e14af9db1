//! Rocket data gateway.
//!
//! ```text
//!     Client ──▶ /hello   ──▶ "Hello, world!"
//!
//!     Client ──▶ /rockets ──▶ GET upstream ──▶ read body ──▶ status check
//!                                                   │
//!     Client ◀── raw upstream bytes ◀── log pretty copy ◀── JSON check
//! ```
//!
//! Runs on built-in defaults (`0.0.0.0:8080`, SpaceX v4 rockets) unless a
//! TOML file is passed with `--config`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use rocket_gateway::config::{load_config, GatewayConfig};
use rocket_gateway::lifecycle::{self, Shutdown};
use rocket_gateway::observability;

#[derive(Parser)]
#[command(name = "rocket-gateway")]
#[command(about = "HTTP gateway relaying the SpaceX rockets API", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    observability::init_logging(&config.observability);
    tracing::info!("rocket-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Arc::new(Shutdown::new());
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        lifecycle::shutdown_signal().await;
        signal_shutdown.trigger();
    });

    lifecycle::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
