//! Sample App entry point.
//!
//! Parses flags, loads configuration (file, then `PORT`), initializes tracing,
//! builds the Axum router, and runs the HTTP server until SIGTERM/SIGINT.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sample_app::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use sample_app::create_router;
use sample_app::http::start_server;

/// Sample App: greeting and health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "sample-app", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "sample_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Config decides the log format, so it loads before tracing is up
    let config = AppConfig::load(args.config.as_deref())?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        config_file = ?args.config,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config.http).await?;

    Ok(())
}
