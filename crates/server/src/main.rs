use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod api;
mod config;

use config::ServerConfig;

#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(about = "Google Workspace tool-call backend for AI agents", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "toolgate.toml")]
    config: PathBuf,

    /// Path to the Google authorized-user token file
    #[arg(short, long, default_value = "token.json")]
    token: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolgate=info,tower_http=debug".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("Starting Toolgate");
    tracing::info!("Token file: {}", args.token.display());

    // Load configuration
    let config = ServerConfig::load(&args.config, args.token)?;

    // Start API server
    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("Starting API server on {}", addr);

    api::serve(&addr, config).await?;

    Ok(())
}
