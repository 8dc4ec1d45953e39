//! CORS relay
//!
//! ```text
//!     Browser ──▶ ┌──────────────────────────────────────────────┐
//!                 │  axum router                                 │
//!                 │    request id → trace → cors → body limit    │
//!                 │    /, /health        (static)                │
//!                 │    /proxy/{path}  ──▶ Forwarder ─────────────┼──▶ Upstream
//!                 │                        attempt, backoff, 502 │
//!     Browser ◀── │  wildcard CORS headers on every response     │◀── (any status)
//!                 └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use cors_relay::config::{self, validation::validate_config, ConfigError};
use cors_relay::lifecycle::startup;

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(version, about = "Relay requests to a fixed upstream with permissive CORS headers", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overriding the config file and PORT.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    startup::run(config).await?;
    Ok(())
}
