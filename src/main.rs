//! Command router (v1)
//!
//! HTTP front end that resolves every request to a command, an action and
//! an optional context id, then answers with the assembled application input.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::normalize ──▶ routing::router
//!                        │                                        │
//!                        │                      custom rules ─────┤
//!                        │                method fallback chain ──┘
//!                        ▼
//!                  http::input (route + payload = AppInput)
//!     ◀──────────────────┘
//!
//!     Cross-cutting: config (load/validate/watch), observability
//!     (tracing, metrics), lifecycle (startup, signals, shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;

use command_router::lifecycle::startup::{self, StartupOptions};

#[derive(Parser)]
#[command(name = "command-router")]
#[command(about = "Resolve HTTP requests to commands and actions", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reload routing settings when the config file changes.
    #[arg(short, long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    startup::run(StartupOptions {
        config_path: args.config,
        watch: args.watch,
    })
    .await?;

    Ok(())
}
