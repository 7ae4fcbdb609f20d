//! Heartbeat: a standalone health-check endpoint service.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file, initializes tracing, builds the
//! Axum router, and starts the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heartbeat::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use heartbeat::routes::create_router;
use heartbeat::server::start_server;

/// Heartbeat: a standalone health-check endpoint service
#[derive(Parser, Debug)]
#[command(name = "heartbeat", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "heartbeat=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration. A probe service must come up with zero
    // configuration, so a missing file falls back to built-in defaults.
    let config_found = Path::new(&args.config).exists();
    let config = if config_found {
        AppConfig::load(&args.config)?
    } else {
        AppConfig::default()
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if config_found {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::warn!(
            path = %args.config,
            "Config file not found, using built-in defaults"
        );
    }

    // Create router
    let app = create_router();

    // Start server, blocking until shutdown
    start_server(app, &config).await?;

    Ok(())
}
